//! Collision layers.
//!
//! One bit per entity kind. Memberships say what a body *is*, filters say
//! what it pairs with: drones and projectiles only admit each other, so the
//! physics step never reports any other combination.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Drone,
    Projectile,
}

/// Drones report contact only against projectiles.
#[inline]
pub fn drone_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Drone, [Layer::Projectile])
}

/// Projectiles report contact only against drones.
#[inline]
pub fn projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [Layer::Drone])
}

/// Scenery exists in the physics world but pairs with nothing.
#[inline]
pub fn inert_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Default, LayerMask::NONE)
}
