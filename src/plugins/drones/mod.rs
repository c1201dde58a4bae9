//! Drone plugin: the targets.
//!
//! A repeating clock releases one drone per period from the left edge. Each
//! drone crosses the full arena at constant speed inside a band below the
//! top edge and is removed on arrival at the far side, or sooner if a
//! projectile finds it first.
//!
//! Requires the core plugin first (reads [`Tunables`] for the period).

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::common::layers::drone_layers;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::motion::LinearFlight;

/// Marker for a crossing drone.
#[derive(Component, Debug, Clone, Copy)]
pub struct Drone;

/// Repeating release clock. Starts pre-elapsed so the very first fixed tick
/// releases a drone instead of waiting out a full period.
#[derive(Resource, Debug)]
pub struct DroneSpawnTimer(Timer);

impl DroneSpawnTimer {
    pub fn with_period(secs: f32) -> Self {
        let mut timer = Timer::from_seconds(secs, TimerMode::Repeating);
        timer.set_elapsed(timer.duration());
        Self(timer)
    }
}

/// Source of the altitude offsets. Entropy-seeded in the real game; tests
/// swap in [`SpawnRng::seeded`] to pin the sequence down.
#[derive(Resource)]
pub struct SpawnRng(pub ChaCha8Rng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

pub fn plugin(app: &mut App) {
    let period = app.world().resource::<Tunables>().drone_spawn_period_secs;
    app.insert_resource(DroneSpawnTimer::with_period(period));
    app.init_resource::<SpawnRng>();
    app.add_systems(FixedUpdate, spawn_drones.run_if(in_state(GameState::InGame)));
}

/// Release a drone whenever the clock wraps.
///
/// The drone flies as a dynamic sensor body: Avian moves it by its constant
/// [`LinearVelocity`] and reports overlaps, but nothing deflects it. The
/// paired [`LinearFlight`] removes it when the crossing time elapses.
pub fn spawn_drones(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut timer: ResMut<DroneSpawnTimer>,
    mut rng: ResMut<SpawnRng>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }

    let offset = rng.0.gen_range(0..tunables.drone_drop_band) as f32;
    let y = tunables.arena_height - offset;
    let start = Vec2::new(0.0, y);
    let flight = LinearFlight::new(
        Vec2::new(tunables.arena_width, y),
        tunables.drone_crossing_secs,
    );
    let velocity = flight.velocity_from(start);

    commands.spawn((
        Name::new("Drone"),
        Drone,
        Sprite {
            color: Color::srgb(0.45, 0.47, 0.50),
            custom_size: Some(tunables.drone_size),
            ..default()
        },
        Transform::from_translation(start.extend(1.0)),
        RigidBody::Dynamic,
        Collider::rectangle(tunables.drone_size.x, tunables.drone_size.y),
        Sensor,
        drone_layers(),
        CollisionEventsEnabled,
        LinearVelocity(velocity),
        flight,
        Occluder2d::circle(tunables.drone_size.y * 0.5),
        DespawnOnExit(GameState::InGame),
    ));
}
