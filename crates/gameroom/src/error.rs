use super::*;
use rfx_stamina::Balance;

/// Reasons a run could not be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The display name failed validation.
    Validation(NameError),
    /// The gate had nothing to spend. Carries the balance so callers
    /// can show the countdown or offer a refill.
    InsufficientStamina(Balance),
    /// The run is already in progress or has ended.
    NotIdle,
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "invalid name: {}", e),
            Self::InsufficientStamina(b) => write!(f, "insufficient stamina: {}", b),
            Self::NotIdle => write!(f, "run already started"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NameError> for RunError {
    fn from(e: NameError) -> Self {
        Self::Validation(e)
    }
}
