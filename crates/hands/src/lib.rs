//! Hand primitives for reflex rps.
//!
//! ## Core Types
//!
//! - [`Hand`] — Rock, Paper, or Scissors, with the cyclic beats relation
//! - [`Offer`] — The three hands in the order they are offered on screen
mod hand;
mod offer;

pub use hand::*;
pub use offer::*;
