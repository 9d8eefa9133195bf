use rfx_core::*;
use rfx_hands::*;
use std::time::Duration;
use tokio::time::Instant;

/// One timed prompt within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    number: u64,
    stage: Stage,
    cpu: Hand,
    offer: Offer,
    started: Instant,
    duration: Duration,
}

impl Round {
    pub fn new(number: u64, stage: Stage, cpu: Hand, offer: Offer, started: Instant, duration: Duration) -> Self {
        Self {
            number,
            stage,
            cpu,
            offer,
            started,
            duration,
        }
    }
    /// Monotonic counter within the run, used to discard stale timeouts.
    pub fn number(&self) -> u64 {
        self.number
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn cpu(&self) -> Hand {
        self.cpu
    }
    pub fn offer(&self) -> Offer {
        self.offer
    }
    pub fn duration(&self) -> Duration {
        self.duration
    }
    pub fn deadline(&self) -> Instant {
        self.started + self.duration
    }
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline().saturating_duration_since(now)
    }
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
    /// The hand that clears this round.
    pub fn answer(&self) -> Hand {
        self.cpu.counter()
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stage {} | cpu {} | {} | {}ms",
            self.stage,
            self.cpu,
            self.offer,
            self.duration.as_millis()
        )
    }
}
