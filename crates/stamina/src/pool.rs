use super::*;
use rfx_core::Millis;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Stamina pool backed by a [`Storage`].
///
/// Every mutation is written through immediately. Storage faults are
/// logged and do not change the outcome of the in-memory operation.
pub struct Pool<S: Storage> {
    config: StaminaConfig,
    storage: S,
    state: Mutex<Stamina>,
}

impl<S: Storage> Pool<S> {
    /// Loads persisted state, applies elapsed regeneration, and saves it back.
    /// Starts full when nothing was persisted or the record is unreadable.
    pub fn open(storage: S, config: StaminaConfig) -> Self {
        Self::open_at(storage, config, rfx_core::now())
    }
    pub fn open_at(storage: S, config: StaminaConfig, now: Millis) -> Self {
        let mut stamina = match storage.load() {
            Ok(Some(stamina)) => stamina,
            Ok(None) => Stamina::full(&config, now),
            Err(e) => {
                log::warn!("[stamina] discarding unreadable state: {}", e);
                Stamina::full(&config, now)
            }
        };
        stamina.regenerate(&config, now);
        let pool = Self {
            config,
            storage,
            state: Mutex::new(stamina),
        };
        pool.persist(&stamina);
        pool
    }
    pub fn config(&self) -> &StaminaConfig {
        &self.config
    }
    pub fn try_consume_at(&self, now: Millis) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let spent = state.consume(&self.config, now);
        self.persist(&state);
        log::debug!("[stamina] consume -> {} ({} left)", spent, state.current());
        spent
    }
    pub fn balance_at(&self, now: Millis) -> Balance {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .balance(&self.config, now)
    }
    pub fn refill_at(&self, now: Millis) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.refill(&self.config, now);
        self.persist(&state);
        log::info!("[stamina] refilled to {}", state.current());
    }
    fn persist(&self, stamina: &Stamina) {
        if let Err(e) = self.storage.save(stamina) {
            log::warn!("[stamina] failed to persist: {}", e);
        }
    }
}

impl<S: Storage> Gate for Pool<S> {
    fn try_consume(&self) -> bool {
        self.try_consume_at(rfx_core::now())
    }
    fn balance(&self) -> Balance {
        self.balance_at(rfx_core::now())
    }
    fn refill(&self) {
        self.refill_at(rfx_core::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const MIN: Millis = 60_000;
    #[test]
    fn fresh_pool_is_full() {
        let pool = Pool::open_at(Volatile, StaminaConfig::default(), 0);
        assert!(pool.balance_at(0).is_full());
    }
    #[test]
    fn drains_then_denies() {
        let pool = Pool::open_at(Volatile, StaminaConfig::default(), 0);
        for _ in 0..5 {
            assert!(pool.try_consume_at(MIN));
        }
        assert!(!pool.try_consume_at(MIN));
        assert!(pool.balance_at(MIN).is_empty());
        pool.refill_at(2 * MIN);
        assert!(pool.try_consume_at(2 * MIN));
    }
    #[test]
    fn survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stamina.json");
        {
            let pool = Pool::open_at(Disk::new(&path), StaminaConfig::default(), 0);
            assert!(pool.try_consume_at(0));
            assert!(pool.try_consume_at(0));
        }
        let pool = Pool::open_at(Disk::new(&path), StaminaConfig::default(), MIN);
        assert_eq!(pool.balance_at(MIN).current, 3);
        let later = Pool::open_at(Disk::new(&path), StaminaConfig::default(), 5 * MIN);
        assert_eq!(later.balance_at(5 * MIN).current, 4);
    }
    #[test]
    fn unreadable_state_starts_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stamina.json");
        std::fs::write(&path, "{").unwrap();
        let pool = Pool::open_at(Disk::new(&path), StaminaConfig::default(), 0);
        assert!(pool.balance_at(0).is_full());
    }
}
