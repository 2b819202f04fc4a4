//! skydash - side-scrolling arcade games for the terminal.
//!
//! Game simulation lives under [`games`] and is exposed for integration
//! tests; the binary adds the terminal event loop on top.

pub mod build_info;
pub mod games;
pub mod input;
pub mod ui;
