//! Core plugin: shared resources and global settings.

use crate::common::tunables::Tunables;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    // Daytime sky behind the sprites.
    app.insert_resource(ClearColor(Color::srgb(0.64, 0.82, 0.96)));
}
