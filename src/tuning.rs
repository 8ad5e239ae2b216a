//! Data-driven game balance
//!
//! Every gameplay constant a session uses, gathered into one serializable
//! struct. `Tuning::default()` matches `crate::consts`; partial JSON documents
//! override only the fields they name.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Error loading a configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON for the target type
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but describes an unplayable configuration
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Gameplay balance values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Units per second
    pub player_speed: f32,
    pub start_health: u32,

    // === Shooting ===
    /// Seconds between shots while fire is held
    pub fire_rate: f32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub muzzle_offset: f32,
    pub bullet_cull_margin: f32,

    // === Enemies ===
    /// Seconds between spawns
    pub spawn_interval: f32,
    pub enemy_radius: f32,
    /// Per-spawn speed is sampled uniformly from `[min, max)`
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub spawn_ring_offset: f32,

    // === Timing ===
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            start_health: PLAYER_START_HEALTH,

            fire_rate: FIRE_RATE,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            muzzle_offset: MUZZLE_OFFSET,
            bullet_cull_margin: BULLET_CULL_MARGIN,

            spawn_interval: SPAWN_INTERVAL,
            enemy_radius: ENEMY_RADIUS,
            enemy_speed_min: ENEMY_MIN_SPEED,
            enemy_speed_max: ENEMY_MAX_SPEED,
            spawn_ring_offset: SPAWN_RING_OFFSET,

            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Default balance on a field of the given size
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::Invalid("field size must be positive"));
        }
        if self.player_radius < 0.0
            || self.player_radius * 2.0 > self.field_width.min(self.field_height)
        {
            return Err(ConfigError::Invalid("player does not fit inside the field"));
        }
        if self.start_health == 0 {
            return Err(ConfigError::Invalid("start health must be at least 1"));
        }
        if !(self.fire_rate > 0.0 && self.spawn_interval > 0.0) {
            return Err(ConfigError::Invalid("fire rate and spawn interval must be positive"));
        }
        if !(self.enemy_speed_min < self.enemy_speed_max) {
            return Err(ConfigError::Invalid("enemy speed range is empty"));
        }
        if !(self.max_frame_dt > 0.0) {
            return Err(ConfigError::Invalid("max frame dt must be positive"));
        }
        Ok(())
    }

    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    pub fn field_center(&self) -> Vec2 {
        self.field_size() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.field_size(), Vec2::new(800.0, 600.0));
        assert_eq!(t.field_center(), Vec2::new(400.0, 300.0));
        assert_eq!(t.start_health, 5);
        assert_eq!(t.fire_rate, 0.12);
        assert_eq!(t.spawn_interval, 1.4);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let t = Tuning::from_json(r#"{ "field_width": 1024.0, "start_health": 3 }"#).unwrap();
        assert_eq!(t.field_width, 1024.0);
        assert_eq!(t.field_height, FIELD_HEIGHT);
        assert_eq!(t.start_health, 3);
        assert_eq!(t.bullet_speed, BULLET_SPEED);
    }

    #[test]
    fn test_json_round_trip() {
        let t = Tuning::with_field(640.0, 480.0);
        let json = t.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(Tuning::from_json("{ not json"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            Tuning::from_json(r#"{ "field_width": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "enemy_speed_min": 120.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "field_width": 20.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_config_error_messages() {
        use std::error::Error as _;

        let parse = Tuning::from_json("{ not json").unwrap_err();
        assert!(parse.to_string().starts_with("config parse error: "));
        assert!(parse.source().is_some());

        let invalid = Tuning::with_field(20.0, 20.0).validate().unwrap_err();
        assert_eq!(invalid.to_string(), "invalid config: player does not fit inside the field");
        assert!(invalid.source().is_none());
    }
}
