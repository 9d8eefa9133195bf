//! WebSocket hosting for reflex runs.
//!
//! Server-side machinery for playing runs over WebSocket and reading the
//! shared leaderboard over HTTP.
//!
//! ## Core Types
//!
//! - [`Arcade`] — Registry of live runs and their lifecycles
//! - [`Client`] — Presenter that serializes room events for a socket
//! - [`RunHandle`] — Channel endpoints for bridging a socket to a room
//!
//! ## HTTP Handlers
//!
//! The [`handlers`] submodule exposes actix-web routes:
//! start, enter, and leave a run; top entries and personal rank.
mod arcade;
mod client;
mod handle;
pub mod handlers;

pub use arcade::*;
pub use client::*;
pub use handle::*;
