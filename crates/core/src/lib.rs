//! Core type aliases, traits, and constants for reflex rps.
//!
//! This crate provides the foundational types and tuning parameters
//! shared by the game room, leaderboard, stamina gate, and hosting crates.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stage reached within a run. Doubles as the final score.
pub type Stage = u32;
/// Wall-clock or logical time in milliseconds.
pub type Millis = u64;
/// Offered-choice index on screen (0 = left, 1 = middle, 2 = right).
pub type Slot = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and gameplay sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// ROUND TIMING
// duration(stage) = max(BASE - (stage - 1) * STEP, FLOOR)
// ============================================================================
/// Countdown for the first round (milliseconds).
pub const ROUND_BASE_MS: Millis = 5000;
/// Countdown shrinkage per stage cleared (milliseconds).
pub const ROUND_STEP_MS: Millis = 150;
/// Countdown never drops below this (milliseconds).
pub const ROUND_FLOOR_MS: Millis = 700;
/// Pause between a winning pick and the next round, so the result can be shown.
pub const ROUND_GRACE_MS: Millis = 300;

// ============================================================================
// PLAYER NAMES
// ============================================================================
/// Maximum nickname length in characters.
pub const NAME_LIMIT: usize = 10;

// ============================================================================
// LEADERBOARD
// ============================================================================
/// Default and maximum size of a top-N listing.
pub const LEADERBOARD_TOP: usize = 500;

// ============================================================================
// STAMINA
// ============================================================================
/// Stamina pool capacity.
pub const STAMINA_MAX: u32 = 5;
/// One stamina unit regenerates per interval (milliseconds).
pub const STAMINA_INTERVAL_MS: Millis = 5 * 60 * 1000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Milliseconds since the unix epoch.
pub fn now() -> Millis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as Millis)
        .unwrap_or_default()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", now() / 1000)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// File-only logging for interactive binaries that own the terminal.
#[cfg(feature = "server")]
pub fn quiet() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::WriteLogger::init(
        log::LevelFilter::Debug,
        config,
        std::fs::File::create(format!("logs/{}.log", now() / 1000)).expect("create log file"),
    )
    .expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn ids_are_distinct() {
        let a = ID::<()>::default();
        let b = ID::<()>::default();
        assert_ne!(a, b);
    }
    #[test]
    fn clock_is_past_epoch() {
        assert!(now() > 1_600_000_000_000);
    }
}
