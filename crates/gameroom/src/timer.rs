use rfx_core::*;
use std::time::Duration;

/// Countdown tuning.
///
/// A round lasts `max(base - (stage - 1) * step, floor)`, so difficulty
/// only ever tightens or plateaus as the stage grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub base: Duration,
    pub step: Duration,
    pub floor: Duration,
    /// Pause after a win before the next round is shown.
    pub grace: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(ROUND_BASE_MS),
            step: Duration::from_millis(ROUND_STEP_MS),
            floor: Duration::from_millis(ROUND_FLOOR_MS),
            grace: Duration::from_millis(ROUND_GRACE_MS),
        }
    }
}

impl TimerConfig {
    pub fn duration(&self, stage: Stage) -> Duration {
        let cleared = stage.saturating_sub(1);
        self.base
            .checked_sub(self.step.saturating_mul(cleared))
            .unwrap_or_default()
            .max(self.floor)
    }
}
