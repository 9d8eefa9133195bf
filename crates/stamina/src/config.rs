use rfx_core::*;

/// Capacity and regeneration rate of a stamina pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaminaConfig {
    pub max: u32,
    pub interval: Millis,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            max: STAMINA_MAX,
            interval: STAMINA_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_config() {
        let config = StaminaConfig::default();
        assert_eq!(config.max, 5);
        assert_eq!(config.interval, 300_000);
    }
}
