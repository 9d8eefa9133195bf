/// Why a display name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    Empty,
    TooLong { limit: usize, len: usize },
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "name is empty"),
            Self::TooLong { limit, len } => {
                write!(f, "name is {} characters, limit is {}", len, limit)
            }
        }
    }
}

impl std::error::Error for NameError {}

/// Validated player display name.
///
/// Surrounding whitespace is trimmed; length is counted in characters,
/// not bytes, so short non-ASCII names are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str, limit: usize) -> Result<Self, NameError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        match len {
            0 => Err(NameError::Empty),
            n if n > limit => Err(NameError::TooLong { limit, len }),
            _ => Ok(Self(trimmed.to_string())),
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn trims_whitespace() {
        assert_eq!(Name::parse("  Kim ", 10).unwrap().as_str(), "Kim");
    }
    #[test]
    fn rejects_blank() {
        assert_eq!(Name::parse("", 10), Err(NameError::Empty));
        assert_eq!(Name::parse("   ", 10), Err(NameError::Empty));
    }
    #[test]
    fn enforces_limit() {
        assert!(Name::parse("abcdefghij", 10).is_ok());
        assert_eq!(
            Name::parse("abcdefghijk", 10),
            Err(NameError::TooLong { limit: 10, len: 11 })
        );
    }
    #[test]
    fn counts_characters() {
        assert!(Name::parse("김민준김민준김민준김", 10).is_ok());
    }
}
