//! Aim geometry for the turret.
//!
//! Pure functions so the shot math is testable without an `App`. The zero
//! length case (firing exactly at the turret's own position) has no defined
//! direction; both functions return `None` and the caller skips the shot.

use bevy::prelude::*;

/// Unit vector from `origin` toward `target`, or `None` when the two points
/// coincide (no direction to normalise).
#[inline]
pub fn aim_direction(origin: Vec2, target: Vec2) -> Option<Vec2> {
    (target - origin).try_normalize()
}

/// Far-off point `range` units from `origin` in the direction of `target`.
///
/// The destination deliberately overshoots the arena so the projectile exits
/// the visible area before its flight completes.
#[inline]
pub fn shot_destination(origin: Vec2, target: Vec2, range: f32) -> Option<Vec2> {
    aim_direction(origin, target).map(|dir| origin + dir * range)
}
