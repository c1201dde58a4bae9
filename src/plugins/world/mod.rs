//! World plugin: the static backdrop.
//!
//! The arena has no walls; drones enter and leave through the side edges.
//! What it does have is a ground strip across the bottom tenth of the screen
//! and a physics edge along the horizon where ground meets sky.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::inert_layers;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

/// Fraction of the arena height taken up by the ground.
pub const SKY_LINE_FRACTION: f32 = 0.10;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_backdrop);
}

fn spawn_backdrop(mut commands: Commands, tunables: Res<Tunables>) {
    let w = tunables.arena_width;
    let sky_y = tunables.arena_height * SKY_LINE_FRACTION;

    commands.spawn((
        Name::new("Ground"),
        Sprite {
            color: Color::srgb(0.33, 0.42, 0.18),
            custom_size: Some(Vec2::new(w, sky_y)),
            ..default()
        },
        Transform::from_xyz(w * 0.5, sky_y * 0.5, 0.0),
        DespawnOnExit(GameState::InGame),
    ));

    // Horizon edge. Its layers filter nothing in, so it never takes part in
    // a contact; it only anchors the scene.
    commands.spawn((
        Name::new("SkyLine"),
        RigidBody::Static,
        Collider::segment(Vec2::new(-w * 0.5, 0.0), Vec2::new(w * 0.5, 0.0)),
        inert_layers(),
        Transform::from_xyz(w * 0.5, sky_y, 0.0),
        DespawnOnExit(GameState::InGame),
    ));
}
