//! Library entry point.
//!
//! The binary is a thin wrapper around [`game::run`]; everything else is
//! exported so the headless integration tests in `tests/` can drive the
//! same plugin wiring the real app uses.

pub mod game;
pub mod common;
pub mod plugins;
