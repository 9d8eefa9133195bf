use super::*;

/// Resource gate consulted before a run may start.
///
/// Implementations must be cheap and non-blocking; they are called
/// from inside async request handlers.
pub trait Gate: Send + Sync {
    /// Spends one unit if available.
    fn try_consume(&self) -> bool;
    fn balance(&self) -> Balance;
    /// Restores the pool to capacity.
    fn refill(&self);
}

/// Gate that never denies. Used where stamina is a client-side concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl Gate for Unlimited {
    fn try_consume(&self) -> bool {
        true
    }
    fn balance(&self) -> Balance {
        Balance {
            current: u32::MAX,
            max: u32::MAX,
            until_next: None,
        }
    }
    fn refill(&self) {}
}

impl<G: Gate + ?Sized> Gate for std::sync::Arc<G> {
    fn try_consume(&self) -> bool {
        (**self).try_consume()
    }
    fn balance(&self) -> Balance {
        (**self).balance()
    }
    fn refill(&self) {
        (**self).refill()
    }
}
