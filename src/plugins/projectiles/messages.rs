//! Buffered fire requests.
//!
//! Input produces *intent*; the spawner applies it. The message queue between
//! the two keeps the producer from borrowing any of the spawner's data.

use bevy::prelude::*;

/// A single tap or click, aimed at a world-space point.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct FireRequest {
    pub target: Vec2,
}
