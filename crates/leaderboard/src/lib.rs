//! Shared best-score leaderboard.
//!
//! Keeps one record per player name and answers "top N" and
//! "what is my rank" under a single ordering:
//! score descending, then more recent achievement first,
//! then name ascending as a deterministic last resort.
//!
//! ## Core Types
//!
//! - [`Entry`] — A player's best score and when it was achieved
//! - [`Ranking`] — An entry together with its 1-based rank
//! - [`Submission`] — What a submit did to the stored record
//! - [`Leaderboard`] — Store trait; [`Memory`] and (with `database`) `Postgres`
mod entry;
mod error;
mod memory;
#[cfg(feature = "database")]
mod postgres;
mod store;

pub use entry::*;
pub use error::*;
pub use memory::*;
#[cfg(feature = "database")]
pub use postgres::*;
pub use store::*;
