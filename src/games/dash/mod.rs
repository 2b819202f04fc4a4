//! Late Dash: a school-run side-scroller.
//!
//! The runner sprints down a scrolling street, jumping teachers, puddles,
//! student groups, and stray dogs. Clearing hazards earns distance points;
//! reach the target before the 90-second bell and the run counts as a win.
//! Ground and ceiling are survivable; the hazards are not.

pub mod logic;
pub mod types;

pub use logic::{advance, process_input, step};
pub use types::{DashGame, Hazard, HazardKind};
