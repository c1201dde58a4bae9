//! Camera plugin (render-only).
//!
//! One fixed camera parked over the arena center, so world coordinates read
//! as screen coordinates with the origin in the bottom-left corner. Nothing
//! ever moves it; the whole game fits one screen.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera);
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        FireflyConfig::default(),
        Transform::from_xyz(
            tunables.arena_width * 0.5,
            tunables.arena_height * 0.5,
            999.0,
        ),
        DespawnOnExit(GameState::InGame),
    ));
}
