//! Sky Run: a gap-navigation side-scroller.
//!
//! The bird holds a fixed x while five pipes scroll past, recycled in place
//! as they leave the left edge. Gravity pulls the bird down each tick and a
//! flap sets its upward velocity. Touching a pipe, the ground, or the top of
//! the sky ends the run. The sky itself cycles from day to night as the
//! score climbs.

pub mod logic;
pub mod palette;
pub mod types;

pub use logic::{advance, process_input, step};
pub use types::{FlappyGame, Pipe};
