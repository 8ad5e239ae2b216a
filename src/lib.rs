//! Swarm Shooter - A top-down arena shooter
//!
//! Core modules:
//! - `sim`: Simulation core (movement, spawning, projectiles, collisions)
//! - `game`: Frame loop glue between input, clock, simulation and renderer
//! - `renderer`: Stateless projection of a snapshot into a draw list
//! - `platform`: Input bindings and pointer transforms
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::{Game, Renderer};
pub use settings::Settings;
pub use tuning::{ConfigError, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest timestep a single update may advance (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const PLAYER_SPEED: f32 = 250.0; // units / second
    pub const PLAYER_START_HEALTH: u32 = 5;

    /// Shooting
    pub const FIRE_RATE: f32 = 0.12; // seconds between shots
    pub const BULLET_SPEED: f32 = 700.0;
    pub const BULLET_RADIUS: f32 = 4.0;
    /// Gap between the hull and a freshly spawned bullet
    pub const MUZZLE_OFFSET: f32 = 6.0;
    /// Bullets are culled once this far outside the field
    pub const BULLET_CULL_MARGIN: f32 = 50.0;

    /// Enemy spawning
    pub const SPAWN_INTERVAL: f32 = 1.4; // seconds
    pub const ENEMY_RADIUS: f32 = 14.0;
    pub const ENEMY_MIN_SPEED: f32 = 50.0;
    pub const ENEMY_MAX_SPEED: f32 = 110.0;
    /// Enemies appear this far outside one of the field edges
    pub const SPAWN_RING_OFFSET: f32 = 20.0;
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle (radians) of the vector pointing from `from` to `to`
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
