//! Lighting plugin (Firefly) (render-only).
//!
//! A single warm lamp over the turret. Drones carry occluders, so they cast
//! moving shadows as they cross the beam.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Component)]
pub struct TurretLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup);
}

fn setup(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("TurretLight"),
        TurretLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            range: 450.0,
            ..default()
        },
        Transform::from_translation(tunables.turret_position().extend(10.0)),
        DespawnOnExit(GameState::InGame),
    ));
}
