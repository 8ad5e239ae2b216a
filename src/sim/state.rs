//! Game state and core simulation types
//!
//! `GameState` owns every entity collection and session timer. All mutation
//! goes through `update`/`restart`; the renderer only ever sees a `Snapshot`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::tick::{GameEvent, TickInput, tick};
use crate::tuning::{ConfigError, Tuning};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Player ran out of health; frozen until restart
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Units per second
    pub speed: f32,
    /// Facing angle (radians), toward the pointer
    pub angle: f32,
    pub health: u32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.field_center(),
            radius: tuning.player_radius,
            speed: tuning.player_speed,
            angle: 0.0,
            health: tuning.start_health,
        }
    }

    /// Unit vector along the facing angle
    pub fn facing(&self) -> Vec2 {
        crate::direction_from_angle(self.angle)
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    pub radius: f32,
}

/// A homing enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    /// Scalar pursuit speed, units per second
    pub speed: f32,
}

/// Read-only, frame-consistent copy of everything the renderer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub field: Vec2,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub score: u64,
    pub game_over: bool,
}

impl Snapshot {
    pub fn health(&self) -> u32 {
        self.player.health
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values this session runs with
    pub tuning: Tuning,
    /// Spawn RNG; not reseeded on restart
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub player: Player,
    /// Active bullets, in firing order
    pub bullets: Vec<Bullet>,
    /// Active enemies, in spawn order
    pub enemies: Vec<Enemy>,
    /// Seconds until the next shot is allowed (never below 0)
    pub fire_cooldown: f32,
    /// Seconds until the next enemy spawn
    pub spawn_timer: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new session, rejecting tuning the simulation cannot run
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        log::info!(
            "New session: seed={}, field={}x{}",
            seed,
            tuning.field_width,
            tuning.field_height
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            player: Player::new(&tuning),
            bullets: Vec::new(),
            enemies: Vec::new(),
            fire_cooldown: 0.0,
            spawn_timer: 0.0,
            time_ticks: 0,
            tuning,
        }
    }

    /// Advance the world by `dt` seconds
    pub fn update(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        tick(self, input, dt)
    }

    /// Return to the initial session state, keeping the RNG stream going
    pub fn restart(&mut self) {
        log::info!("Restart (previous score {})", self.score);
        self.bullets.clear();
        self.enemies.clear();
        self.score = 0;
        self.player.pos = self.tuning.field_center();
        self.player.health = self.tuning.start_health;
        self.phase = GamePhase::Playing;
        self.spawn_timer = 0.0;
        self.fire_cooldown = 0.0;
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn health(&self) -> u32 {
        self.player.health
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field: self.tuning.field_size(),
            player: self.player,
            bullets: self.bullets.clone(),
            enemies: self.enemies.clone(),
            score: self.score,
            game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.health(), 5);
        assert_eq!(state.score(), 0);
        assert_eq!(state.player().pos, Vec2::new(400.0, 300.0));
        assert!(state.bullets().is_empty());
        assert!(state.enemies().is_empty());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_with_tuning_validates() {
        let state = GameState::with_tuning(1, Tuning::with_field(640.0, 480.0)).unwrap();
        assert_eq!(state.player().pos, Vec2::new(320.0, 240.0));

        assert!(matches!(
            GameState::with_tuning(1, Tuning::with_field(20.0, 20.0)),
            Err(ConfigError::Invalid(_))
        ));
        let no_health = Tuning {
            start_health: 0,
            ..Tuning::default()
        };
        assert!(GameState::with_tuning(1, no_health).is_err());
    }

    #[test]
    fn test_restart_resets_session_but_not_rng() {
        use rand::Rng;

        let mut state = GameState::new(7);
        let mut fresh_rng = state.rng.clone();

        state.update(&TickInput::default(), 0.016);
        state.score = 12;
        state.player.health = 0;
        state.player.pos = Vec2::new(20.0, 20.0);
        state.phase = GamePhase::GameOver;
        state.fire_cooldown = 0.1;
        state.spawn_timer = 0.7;
        state.bullets.push(Bullet {
            pos: Vec2::ZERO,
            vel: Vec2::X,
            radius: 4.0,
        });

        state.restart();

        assert!(state.bullets().is_empty());
        assert!(state.enemies().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.health(), 5);
        assert_eq!(state.player().pos, Vec2::new(400.0, 300.0));
        assert!(!state.is_game_over());
        assert_eq!(state.fire_cooldown, 0.0);
        assert_eq!(state.spawn_timer, 0.0);
        // The first tick spawned an enemy, so the stream has moved on
        assert_ne!(state.rng.random::<u64>(), fresh_rng.random::<u64>());
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut state = GameState::new(1);
        state.enemies.push(Enemy {
            pos: Vec2::new(10.0, 10.0),
            radius: 14.0,
            speed: 60.0,
        });
        let snap = state.snapshot();
        state.enemies.clear();
        state.score = 3;

        assert_eq!(snap.enemies.len(), 1);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.health(), 5);
        assert_eq!(snap.field, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = GameState::new(3).snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
