/// Errors raised while loading or saving persisted stamina.
#[derive(Debug)]
pub enum StaminaError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl std::fmt::Display for StaminaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "stamina storage io: {}", e),
            Self::Format(e) => write!(f, "stamina storage format: {}", e),
        }
    }
}

impl std::error::Error for StaminaError {}

impl From<std::io::Error> for StaminaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StaminaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e)
    }
}
