//! Async runtime for reflex runs.
//!
//! A run is a sequence of timed rounds. Each round shows a CPU hand and
//! the three hands in shuffled order; the player must pick the counter
//! before the countdown expires. A correct pick advances the stage, a
//! wrong pick or an expired countdown ends the run, and the final stage
//! is submitted to the leaderboard.
//!
//! ## Architecture
//!
//! - [`Run`] — Functional core: stage, status, the open round, resolution rules
//! - [`Room`] — Imperative shell: owns one Run, serializes input and timeouts
//!   through a single inbox, talks to the presenter and the leaderboard
//! - [`Presenter`] — Trait for pluggable front ends (terminal, websocket, bot)
//! - [`Channel`] — Coupled inbox sender/receiver
//!
//! ## Wire
//!
//! - [`ServerMessage`] — JSON pushed to websocket clients
//! - [`Protocol`] — Parses client text into [`Input`]
mod channel;
mod config;
mod error;
mod event;
mod message;
mod name;
mod presenter;
mod protocol;
mod room;
mod round;
mod run;
mod timer;

pub use channel::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use message::*;
pub use name::*;
pub use presenter::*;
pub use protocol::*;
pub use room::*;
pub use round::*;
pub use run::*;
pub use timer::*;
