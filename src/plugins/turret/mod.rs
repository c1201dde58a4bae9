//! Turret plugin: the stationary gun at the bottom of the screen.
//!
//! The turret never moves and carries no physics body. It exists as the
//! visual anchor and as the point every shot is measured from.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

/// Marker for the gun emplacement.
#[derive(Component, Debug, Clone, Copy)]
pub struct Turret;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_turret);
}

fn spawn_turret(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("Turret"),
        Turret,
        Sprite {
            color: Color::srgb(0.24, 0.28, 0.20),
            custom_size: Some(tunables.turret_size),
            ..default()
        },
        Transform::from_translation(tunables.turret_position().extend(1.5)),
        DespawnOnExit(GameState::InGame),
    ));
}
