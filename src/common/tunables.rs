//! Tunable gameplay constants.
//!
//! The arena spans `0..arena_width` / `0..arena_height` in world units with
//! the origin at the bottom-left corner; the camera is parked over the centre
//! so world coordinates double as scene coordinates.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub arena_width: f32,
    pub arena_height: f32,
    pub turret_size: Vec2,
    /// Turret centre height above the arena floor.
    pub turret_height: f32,
    pub drone_size: Vec2,
    /// Drones spawn this far below the arena ceiling at most (random offset
    /// is an integer in `[0, drone_drop_band)`).
    pub drone_drop_band: u32,
    /// Time a drone takes to cross the full arena width.
    pub drone_crossing_secs: f32,
    pub drone_spawn_period_secs: f32,
    pub projectile_size: f32,
    /// How far past the aim point a shot's destination is projected.
    pub shot_range: f32,
    /// Time a projectile takes to reach its destination.
    pub shot_flight_secs: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            arena_width: 1280.0,
            arena_height: 720.0,
            turret_size: Vec2::new(150.0, 125.0),
            turret_height: 90.0,
            drone_size: Vec2::new(64.0, 40.0),
            drone_drop_band: 200,
            drone_crossing_secs: 4.0,
            drone_spawn_period_secs: 4.5,
            projectile_size: 16.0,
            shot_range: 2000.0,
            shot_flight_secs: 1.5,
        }
    }
}

impl Tunables {
    /// World position the turret occupies: horizontal mid-arena, a fixed
    /// height above the floor.
    #[inline]
    pub fn turret_position(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.turret_height)
    }
}
