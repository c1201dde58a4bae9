//! Physics plugin: Avian setup.
//!
//! Gravity is zeroed because every moving body is driven by an explicit
//! [`LinearVelocity`](avian2d::prelude::LinearVelocity) toward a scripted
//! destination. Requires the core plugin first (reads [`Tunables`]).

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));
    app.insert_resource(Gravity(Vec2::ZERO));
}
