//! Per-frame simulation step
//!
//! Advances the world by one (already clamped) timestep. Step order matters:
//! player damage is resolved before bullet hits so an enemy that reaches the
//! player in the same tick a bullet touches it never scores.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{circles_overlap, clamp_to_field, outside_field, pursuit_direction};
use super::spawn::{Edge, spawn_enemy};
use super::state::{Bullet, GamePhase, GameState};
use crate::angle_between;

/// Input state sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Pointer position in field units
    pub pointer: Vec2,
    /// Fire trigger held
    pub fire: bool,
}

impl TickInput {
    /// Unit movement direction (zero when no intent or opposing intents cancel)
    pub fn move_direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.move_up {
            dir.y -= 1.0;
        }
        if self.move_down {
            dir.y += 1.0;
        }
        if self.move_left {
            dir.x -= 1.0;
        }
        if self.move_right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// Things that happened during a tick (for sound, logging, HUD effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired,
    EnemySpawned { edge: Edge },
    EnemyKilled { pos: Vec2 },
    PlayerHit { health: u32 },
    GameOver { score: u64 },
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Frozen until restart
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;
    let field = state.tuning.field_size();

    // --- MOVEMENT ---
    let dir = input.move_direction();
    let player = &mut state.player;
    player.pos += dir * player.speed * dt;
    player.pos = clamp_to_field(player.pos, player.radius, field);

    // --- AIM ---
    // Non-finite pointer coordinates keep the previous facing
    if input.pointer.is_finite() {
        player.angle = angle_between(player.pos, input.pointer);
    }

    // --- SHOOTING ---
    state.fire_cooldown = (state.fire_cooldown - dt).max(0.0);
    if input.fire && state.fire_cooldown <= 0.0 {
        state.fire_cooldown = state.tuning.fire_rate;
        let facing = state.player.facing();
        let muzzle = state.player.radius + state.tuning.muzzle_offset;
        state.bullets.push(Bullet {
            pos: state.player.pos + facing * muzzle,
            vel: facing * state.tuning.bullet_speed,
            radius: state.tuning.bullet_radius,
        });
        events.push(GameEvent::Fired);
    }

    // --- BULLETS ---
    let margin = state.tuning.bullet_cull_margin;
    state.bullets.retain_mut(|b| {
        b.pos += b.vel * dt;
        !outside_field(b.pos, field, margin)
    });

    // --- SPAWNING ---
    state.spawn_timer -= dt;
    if state.spawn_timer <= 0.0 {
        state.spawn_timer = state.tuning.spawn_interval;
        let (enemy, edge) = spawn_enemy(&mut state.rng, &state.tuning);
        log::debug!(
            "Spawned enemy on {:?} at ({:.0}, {:.0}) speed {:.1}",
            edge,
            enemy.pos.x,
            enemy.pos.y,
            enemy.speed
        );
        state.enemies.push(enemy);
        events.push(GameEvent::EnemySpawned { edge });
    }

    // --- ENEMIES ---
    // Reverse index walk so removals never skip or revisit an enemy. A lethal
    // hit does not end the pass; the rest of the swarm still resolves.
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    let mut i = state.enemies.len();
    while i > 0 {
        i -= 1;

        let enemy = &mut state.enemies[i];
        enemy.pos += pursuit_direction(enemy.pos, player_pos) * enemy.speed * dt;
        let enemy = *enemy;

        // Player contact takes priority over bullet hits
        if circles_overlap(enemy.pos, enemy.radius, player_pos, player_radius) {
            state.enemies.remove(i);
            state.player.health = state.player.health.saturating_sub(1);
            events.push(GameEvent::PlayerHit {
                health: state.player.health,
            });
            log::debug!("Player hit, health {}", state.player.health);

            if state.player.health == 0 {
                state.phase = GamePhase::GameOver;
            }
            continue;
        }

        // First overlapping bullet in firing order; it is removed before the
        // next enemy is examined, so a bullet can only ever kill once
        if let Some(j) = state
            .bullets
            .iter()
            .position(|b| circles_overlap(b.pos, b.radius, enemy.pos, enemy.radius))
        {
            state.bullets.remove(j);
            state.enemies.remove(i);
            state.score += 1;
            events.push(GameEvent::EnemyKilled { pos: enemy.pos });
            log::debug!("Enemy destroyed, score {}", state.score);
        }
    }

    if state.phase == GamePhase::GameOver {
        events.push(GameEvent::GameOver { score: state.score });
        log::info!("Game over: score {}", state.score);
    }

    log::trace!(
        "tick {}: bullets={} enemies={}",
        state.time_ticks,
        state.bullets.len(),
        state.enemies.len()
    );

    events
}
