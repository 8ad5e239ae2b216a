//! Simulation core
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Timestep supplied by the caller, clamped by `FrameClock`
//! - Seeded RNG only
//! - Stable iteration order (collection order)

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use clock::{FrameClock, ManualClock, SystemClock, TimeSource};
pub use collision::{circles_overlap, clamp_to_field, outside_field};
pub use spawn::{Edge, ring_point, spawn_enemy, spawn_enemy_on};
pub use state::{Bullet, Enemy, GamePhase, GameState, Player, Snapshot};
pub use tick::{GameEvent, TickInput, tick};
