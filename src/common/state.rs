//! Global state machine.
//!
//! Entered once at startup and never exited; scene teardown belongs to the
//! host window/app lifecycle, not to gameplay.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
