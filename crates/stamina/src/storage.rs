use super::*;
use std::path::PathBuf;

/// Durable home for a stamina pool.
pub trait Storage: Send + Sync {
    /// Returns None when nothing has been saved yet.
    fn load(&self) -> Result<Option<Stamina>, StaminaError>;
    fn save(&self, stamina: &Stamina) -> Result<(), StaminaError>;
}

/// JSON file holding `current` and `baseline`.
#[derive(Debug, Clone)]
pub struct Disk {
    path: PathBuf,
}

impl Disk {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Storage for Disk {
    fn load(&self) -> Result<Option<Stamina>, StaminaError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
    fn save(&self, stamina: &Stamina) -> Result<(), StaminaError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string(stamina)?)?;
        Ok(())
    }
}

/// Keeps nothing. Every process starts with a full pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Volatile;

impl Storage for Volatile {
    fn load(&self) -> Result<Option<Stamina>, StaminaError> {
        Ok(None)
    }
    fn save(&self, _: &Stamina) -> Result<(), StaminaError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let disk = Disk::new(dir.path().join("stamina.json"));
        assert!(disk.load().unwrap().is_none());
    }
    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let disk = Disk::new(dir.path().join("nested").join("stamina.json"));
        let stamina = Stamina::new(3, 1234);
        disk.save(&stamina).unwrap();
        assert_eq!(disk.load().unwrap(), Some(stamina));
    }
    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stamina.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Disk::new(path).load(), Err(StaminaError::Format(_))));
    }
}
