use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::geometry::shot_destination;
use crate::common::layers::projectile_layers;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::motion::LinearFlight;
use crate::plugins::turret::Turret;

use super::Projectile;
use super::messages::FireRequest;

/// Consumer: turn each buffered request into a shell leaving the turret.
///
/// Only the aim *direction* comes from the request. The shell always flies a
/// fixed range in a fixed time, so it overshoots the tapped point and leaves
/// the screen unless a drone interrupts it. A request aimed exactly at the
/// turret has no direction and is dropped.
pub fn spawn_projectiles(
    mut commands: Commands,
    mut reader: MessageReader<FireRequest>,
    tunables: Res<Tunables>,
    q_turret: Query<&Transform, With<Turret>>,
) {
    let origin = match q_turret.single() {
        Ok(tf) => tf.translation.truncate(),
        Err(e) => { debug!("No single Turret: {e:?}"); return; }
    };

    for request in reader.read() {
        let Some(dest) = shot_destination(origin, request.target, tunables.shot_range) else {
            debug!("Dropped a shot aimed at the turret itself");
            continue;
        };

        let flight = LinearFlight::new(dest, tunables.shot_flight_secs);
        let velocity = flight.velocity_from(origin);

        commands.spawn((
            Name::new("Projectile"),
            Projectile,
            Sprite {
                color: Color::srgb(0.95, 0.35, 0.15),
                custom_size: Some(Vec2::splat(tunables.projectile_size)),
                ..default()
            },
            Transform::from_translation(origin.extend(0.5)),
            RigidBody::Dynamic,
            Collider::circle(tunables.projectile_size * 0.5),
            Sensor,
            projectile_layers(),
            CollisionEventsEnabled,
            SweptCcd::default(),
            LinearVelocity(velocity),
            flight,
            DespawnOnExit(GameState::InGame),
        ));
    }
}
