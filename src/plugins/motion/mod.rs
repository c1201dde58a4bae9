//! Scripted straight-line flights.
//!
//! Drones and projectiles both fly at constant velocity toward a known
//! destination and are removed on arrival. Avian integrates the velocity;
//! this module owns the *completion* half: a per-entity timer resumed once
//! per fixed tick. When it elapses the transform snaps to the destination
//! and the entity is marked for despawn.
//!
//! There is no cancellation API. An entity removed mid-flight (a resolved
//! hit) takes its `LinearFlight` with it, which is the only interruption
//! the game has.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::cleanup::PendingDespawn;

/// A timed move to a fixed point.
#[derive(Component, Debug, Clone)]
pub struct LinearFlight {
    dest: Vec2,
    timer: Timer,
}

impl LinearFlight {
    pub fn new(dest: Vec2, duration_secs: f32) -> Self {
        Self {
            dest,
            timer: Timer::from_seconds(duration_secs, TimerMode::Once),
        }
    }

    /// Constant velocity that covers `from` → destination in the flight time.
    #[inline]
    pub fn velocity_from(&self, from: Vec2) -> Vec2 {
        (self.dest - from) / self.timer.duration().as_secs_f32()
    }

    #[inline]
    pub fn destination(&self) -> Vec2 {
        self.dest
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        drive_flights.run_if(in_state(GameState::InGame)),
    );
}

/// Tick every flight; natural arrival pins the entity to its destination and
/// marks it for removal.
///
/// The velocity is zeroed on arrival so the physics step between the snap
/// and the despawn sweep cannot carry the body past its destination.
pub fn drive_flights(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(
        Entity,
        &mut LinearFlight,
        &mut Transform,
        Option<&mut LinearVelocity>,
    )>,
) {
    for (e, mut flight, mut tf, velocity) in &mut q {
        flight.timer.tick(time.delta());
        if flight.timer.just_finished() {
            tf.translation.x = flight.dest.x;
            tf.translation.y = flight.dest.y;
            if let Some(mut velocity) = velocity {
                velocity.0 = Vec2::ZERO;
            }
            commands.entity(e).insert(PendingDespawn);
        }
    }
}
