//! Demo/attract-mode pilot
//!
//! Plays the game from a snapshot: aims at the closest enemy, fires whenever
//! something is in the field, and steers away from anything getting close.
//! Output is an ordinary `TickInput`, so the simulation cannot tell it apart
//! from a human.

use glam::Vec2;

use super::state::Snapshot;
use super::tick::TickInput;

/// Enemies closer than this make the pilot back off
const DANGER_RADIUS: f32 = 160.0;
/// Axis component below this is treated as "no key"
const STEER_DEADZONE: f32 = 0.3;

/// Pick an input for the current frame
pub fn autopilot_input(snapshot: &Snapshot) -> TickInput {
    let player = snapshot.player.pos;
    let center = snapshot.field / 2.0;

    let nearest = snapshot.enemies.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player)
            .partial_cmp(&b.pos.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let (pointer, fire, steer) = match nearest {
        Some(enemy) => {
            let dist = enemy.pos.distance(player);
            let steer = if dist < DANGER_RADIUS {
                // Back away, biased toward open space at the center
                (player - enemy.pos).normalize_or_zero()
                    + (center - player).normalize_or_zero() * 0.5
            } else {
                Vec2::ZERO
            };
            (enemy.pos, true, steer)
        }
        // Nothing to shoot: drift home and keep facing forward
        None => (
            player + snapshot.player.facing(),
            false,
            (center - player) / snapshot.field.max_element(),
        ),
    };

    let steer = steer.normalize_or_zero() * steer.length().min(1.0);
    TickInput {
        move_up: steer.y < -STEER_DEADZONE,
        move_down: steer.y > STEER_DEADZONE,
        move_left: steer.x < -STEER_DEADZONE,
        move_right: steer.x > STEER_DEADZONE,
        pointer,
        fire,
    }
}
