//! Presenter implementations for the game room.
//!
//! Concrete types implementing the `Presenter` trait from [`rfx_gameroom`].
//!
//! ## Implementations
//!
//! - [`Reflex`] — Bot with tunable reaction time and accuracy
//! - [`Terminal`] — Text front end for a human at a keyboard (requires `cli` feature)
//! - [`Keyboard`] — Raw key reader feeding a room's inbox (requires `cli` feature)
#[cfg(feature = "cli")]
mod keyboard;
mod reflex;
#[cfg(feature = "cli")]
mod terminal;

#[cfg(feature = "cli")]
pub use keyboard::*;
pub use reflex::*;
#[cfg(feature = "cli")]
pub use terminal::*;
