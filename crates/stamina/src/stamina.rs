use super::*;
use rfx_core::Millis;

/// Persisted stamina state.
///
/// `baseline` is the instant regeneration is measured from. It advances by
/// whole intervals as units regenerate, and resets to "now" whenever a unit
/// is spent from a full pool or the pool is refilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stamina {
    current: u32,
    baseline: Millis,
}

impl Stamina {
    pub fn new(current: u32, baseline: Millis) -> Self {
        Self { current, baseline }
    }
    pub fn full(config: &StaminaConfig, now: Millis) -> Self {
        Self::new(config.max, now)
    }
    pub fn current(&self) -> u32 {
        self.current
    }
    pub fn baseline(&self) -> Millis {
        self.baseline
    }
    /// Credits every whole interval elapsed since the baseline.
    pub fn regenerate(&mut self, config: &StaminaConfig, now: Millis) {
        if config.interval == 0 {
            self.current = config.max;
            self.baseline = now;
            return;
        }
        let ticks = now.saturating_sub(self.baseline) / config.interval;
        if ticks > 0 {
            let credit = u32::try_from(ticks).unwrap_or(u32::MAX);
            self.current = self.current.saturating_add(credit).min(config.max);
            self.baseline += ticks * config.interval;
        }
    }
    /// Spends one unit. Returns false without mutating when empty.
    pub fn consume(&mut self, config: &StaminaConfig, now: Millis) -> bool {
        self.regenerate(config, now);
        if self.current < 1 {
            return false;
        }
        if self.current >= config.max {
            self.baseline = now;
        }
        self.current -= 1;
        true
    }
    /// Restores the pool to capacity (rewarded refill).
    pub fn refill(&mut self, config: &StaminaConfig, now: Millis) {
        self.current = config.max;
        self.baseline = now;
    }
    pub fn balance(&self, config: &StaminaConfig, now: Millis) -> Balance {
        let mut copy = *self;
        copy.regenerate(config, now);
        Balance {
            current: copy.current,
            max: config.max,
            until_next: (copy.current < config.max)
                .then(|| (copy.baseline + config.interval).saturating_sub(now)),
        }
    }
}
