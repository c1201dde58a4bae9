//! Projectiles plugin: **message-based producer → consumer** spawning.
//!
//! # Data flow
//! ```text
//!   Update schedule (variable dt)
//! ┌──────────────────────────────────────────────────────────┐
//! │  (A) Producer: fire_requests_from_input                  │
//! │      - reads: taps / clicks, Window, MainCamera          │
//! │      - writes: FireRequest message                       │
//! │                                                          │
//! │  (B) Consumer: spawn_projectiles                         │
//! │      - reads: FireRequest messages, Turret transform     │
//! │      - spawns: one shell per request                     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The producer only enqueues intent; it never touches the spawner's
//! queries. Once a shell exists, its flight belongs to the motion plugin and
//! its contacts to the contact plugin.

pub mod input;
pub mod messages;
pub mod spawn;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;

/// Marker for a shell in flight.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile;

pub struct ProjectilesPlugin;

/// Maintain fire request message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_fire_messages(mut msgs: ResMut<Messages<messages::FireRequest>>) {
    msgs.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Messages<messages::FireRequest>>();
        app.add_systems(PostUpdate, update_fire_messages);

        // Update-phase pipeline: request -> spawn
        app.add_systems(
            Update,
            (
                input::fire_requests_from_input,
                spawn::spawn_projectiles.after(input::fire_requests_from_input),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
