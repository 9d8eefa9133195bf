use super::*;
use rfx_core::*;
use std::time::Duration;

/// Per-run tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub timer: TimerConfig,
    /// Maximum display name length in characters.
    pub name_limit: usize,
    /// Upper bound on the end-of-run leaderboard submission.
    pub submit_timeout: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            name_limit: NAME_LIMIT,
            submit_timeout: Duration::from_secs(5),
        }
    }
}
