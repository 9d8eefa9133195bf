//! Stamina gate for starting runs.
//!
//! A small pool that regenerates one unit per fixed interval and is
//! spent one unit per run. The pool survives restarts through a
//! [`Storage`] backend keyed by two fields: the current count and the
//! regeneration baseline.
//!
//! ## Core Types
//!
//! - [`Stamina`] — Pure regeneration and consumption arithmetic
//! - [`Balance`] — Snapshot for display (count, capacity, time to next unit)
//! - [`Gate`] — What a run start consults; implemented by [`Pool`] and [`Unlimited`]
//! - [`Storage`] — Persistence seam; [`Disk`] (JSON file) and [`Volatile`]
mod balance;
mod config;
mod error;
mod gate;
mod pool;
mod stamina;
mod storage;

pub use balance::*;
pub use config::*;
pub use error::*;
pub use gate::*;
pub use pool::*;
pub use stamina::*;
pub use storage::*;
