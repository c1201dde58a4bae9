//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes; `run_system_once`
//! flushes the world afterwards so spawns/despawns are visible to assertions.
//! Contact tests inject `CollisionStart` messages directly instead of running
//! the physics pipeline, which keeps them deterministic.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;
use bevy::time::Fixed;
use std::time::Duration;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A `Time<Fixed>` whose delta reads as `dt`, for systems that tick timers.
pub fn fixed_time_with_delta(dt: f32) -> Time<Fixed> {
    let mut t = Time::<Fixed>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

/// Write a `CollisionStart` message as the physics step would, creating the
/// backing `Messages` resource on first use.
pub fn write_collision_start(world: &mut World, collider1: Entity, collider2: Entity) {
    if world.get_resource::<Messages<CollisionStart>>().is_none() {
        world.init_resource::<Messages<CollisionStart>>();
    }
    world.write_message(CollisionStart {
        collider1,
        collider2,
        body1: Some(collider1),
        body2: Some(collider2),
    });
}
