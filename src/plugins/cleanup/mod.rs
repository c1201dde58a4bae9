//! Centralised despawning.
//!
//! Gameplay systems never remove entities inside the fixed step; they mark
//! with `PendingDespawn` and this plugin sweeps once per frame in
//! `PostUpdate`. Marking is idempotent, which is what makes the contact
//! resolver safe against two simultaneous contacts naming the same entity.

use bevy::prelude::*;

use crate::common::state::GameState;

/// Marker: entity should be removed from the scene.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

pub fn plugin(app: &mut App) {
    app.add_systems(
        PostUpdate,
        despawn_marked.run_if(in_state(GameState::InGame)),
    );
}

/// Despawn everything marked for removal.
pub fn despawn_marked(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
