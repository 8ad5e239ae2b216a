//! Frame timing
//!
//! The host supplies successive frame timestamps through a `TimeSource`;
//! `FrameClock` turns them into the timestep handed to the simulation and
//! caps it at `MAX_FRAME_DT` so a stall (backgrounded tab, debugger pause)
//! can never launch enemies or bullets through collision geometry.

use std::time::Instant;

use crate::consts::MAX_FRAME_DT;

/// Source of frame timestamps, in seconds from an arbitrary origin
pub trait TimeSource {
    fn now_seconds(&mut self) -> f64;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now_seconds(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock advanced by hand (tests, headless runs, replays)
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub now: f64,
    /// Added to `now` after every read
    pub step: f64,
}

impl ManualClock {
    /// Clock that advances a fixed amount per frame
    pub fn stepping(step: f64) -> Self {
        Self { now: 0.0, step }
    }

    pub fn advance(&mut self, seconds: f64) {
        self.now += seconds;
    }
}

impl TimeSource for ManualClock {
    fn now_seconds(&mut self) -> f64 {
        let now = self.now;
        self.now += self.step;
        now
    }
}

/// Converts timestamps into clamped per-frame timesteps
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }

    /// Timestep since the previous timestamp, in `[0, max_dt]`
    ///
    /// The first call only records the origin and returns 0. A timestamp
    /// earlier than the previous one also yields 0.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((now - last) as f32).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(123.0), 0.0);
    }

    #[test]
    fn test_regular_frames_pass_through() {
        let mut clock = FrameClock::default();
        clock.tick(1.0);
        let dt = clock.tick(1.016);
        assert!((dt - 0.016).abs() < 1e-5);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::default();
        clock.tick(0.0);
        assert_eq!(clock.tick(3.0), MAX_FRAME_DT);
        // Next frame measures from the stalled timestamp, not the origin
        let dt = clock.tick(3.01);
        assert!((dt - 0.01).abs() < 1e-5);
    }

    #[test]
    fn test_backwards_time_yields_zero() {
        let mut clock = FrameClock::default();
        clock.tick(5.0);
        assert_eq!(clock.tick(4.0), 0.0);
    }

    #[test]
    fn test_manual_clock_steps() {
        let mut src = ManualClock::stepping(0.5);
        assert_eq!(src.now_seconds(), 0.0);
        assert_eq!(src.now_seconds(), 0.5);
        src.advance(2.0);
        assert_eq!(src.now_seconds(), 3.0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut src = SystemClock::new();
        let a = src.now_seconds();
        let b = src.now_seconds();
        assert!(b >= a);
    }
}
