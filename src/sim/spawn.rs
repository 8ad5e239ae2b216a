//! Enemy spawn rule
//!
//! Enemies appear on a ring just outside the field: one of the four edges is
//! picked uniformly, then a uniform point along that edge, pushed out by the
//! ring offset.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Enemy;
use crate::tuning::Tuning;

/// Field edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Edge for a selector value (wraps modulo 4)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_index(rng.random_range(0..Self::ALL.len()))
    }
}

/// Point on the spawn ring for `edge`; `along` in `[0, 1)` picks the
/// position along that edge
pub fn ring_point(edge: Edge, along: f32, tuning: &Tuning) -> Vec2 {
    let w = tuning.field_width;
    let h = tuning.field_height;
    let off = tuning.spawn_ring_offset;
    match edge {
        Edge::Left => Vec2::new(-off, along * h),
        Edge::Right => Vec2::new(w + off, along * h),
        Edge::Top => Vec2::new(along * w, -off),
        Edge::Bottom => Vec2::new(along * w, h + off),
    }
}

/// Create an enemy entering from a fixed edge
pub fn spawn_enemy_on(edge: Edge, rng: &mut impl Rng, tuning: &Tuning) -> Enemy {
    let along: f32 = rng.random_range(0.0..1.0);
    let speed = rng.random_range(tuning.enemy_speed_min..tuning.enemy_speed_max);
    Enemy {
        pos: ring_point(edge, along, tuning),
        radius: tuning.enemy_radius,
        speed,
    }
}

/// Create an enemy on a uniformly chosen edge
pub fn spawn_enemy(rng: &mut impl Rng, tuning: &Tuning) -> (Enemy, Edge) {
    let edge = Edge::random(rng);
    (spawn_enemy_on(edge, rng, tuning), edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_ring_point_corners() {
        let t = Tuning::default();
        assert_eq!(ring_point(Edge::Left, 0.0, &t), Vec2::new(-20.0, 0.0));
        assert_eq!(ring_point(Edge::Right, 0.5, &t), Vec2::new(820.0, 300.0));
        assert_eq!(ring_point(Edge::Top, 0.25, &t), Vec2::new(200.0, -20.0));
        assert_eq!(ring_point(Edge::Bottom, 0.5, &t), Vec2::new(400.0, 620.0));
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Edge::from_index(0), Edge::Left);
        assert_eq!(Edge::from_index(3), Edge::Bottom);
        assert_eq!(Edge::from_index(5), Edge::Right);
    }

    #[test]
    fn test_forced_edge_stays_in_bounds_range() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2024);
        for edge in Edge::ALL {
            for _ in 0..200 {
                let e = spawn_enemy_on(edge, &mut rng, &t);
                match edge {
                    Edge::Left | Edge::Right => {
                        assert!(e.pos.y >= 0.0 && e.pos.y <= t.field_height);
                        let x = if edge == Edge::Left { -20.0 } else { 820.0 };
                        assert_eq!(e.pos.x, x);
                    }
                    Edge::Top | Edge::Bottom => {
                        assert!(e.pos.x >= 0.0 && e.pos.x <= t.field_width);
                        let y = if edge == Edge::Top { -20.0 } else { 620.0 };
                        assert_eq!(e.pos.y, y);
                    }
                }
                assert!(e.speed >= 50.0 && e.speed < 110.0);
                assert_eq!(e.radius, 14.0);
            }
        }
    }

    #[test]
    fn test_random_edges_cover_all_four() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let (_, edge) = spawn_enemy(&mut rng, &t);
            seen[Edge::ALL.iter().position(|e| *e == edge).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let t = Tuning::default();
        let mut a = Pcg32::seed_from_u64(77);
        let mut b = Pcg32::seed_from_u64(77);
        for _ in 0..10 {
            assert_eq!(spawn_enemy(&mut a, &t), spawn_enemy(&mut b, &t));
        }
    }
}
