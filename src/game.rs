//! Frame loop
//!
//! One `frame()` per display refresh: read the clock, clamp the step, honor a
//! pending restart, advance the simulation, and hand the renderer a snapshot.

use crate::platform::InputState;
use crate::sim::{
    FrameClock, GameEvent, GameState, Snapshot, TickInput, TimeSource, autopilot_input,
};
use crate::tuning::{ConfigError, Tuning};

/// Consumer of per-frame snapshots
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}

/// Polled supplier of per-frame input
pub trait InputSource {
    /// Input for this frame; `snapshot` is the state before the update
    fn poll(&mut self, snapshot: &Snapshot) -> TickInput;

    /// Consume a restart request; honored only when `game_over` is true
    fn take_restart(&mut self, game_over: bool) -> bool;
}

impl InputSource for InputState {
    fn poll(&mut self, _snapshot: &Snapshot) -> TickInput {
        self.tick_input()
    }

    fn take_restart(&mut self, game_over: bool) -> bool {
        InputState::take_restart(self, game_over)
    }
}

/// Computer-controlled input for attract mode and headless runs
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Frames to linger on the game-over screen before restarting
    pub restart_delay_frames: u32,
    waited: u32,
}

impl Autopilot {
    pub fn new(restart_delay_frames: u32) -> Self {
        Self {
            restart_delay_frames,
            waited: 0,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &Snapshot) -> TickInput {
        autopilot_input(snapshot)
    }

    fn take_restart(&mut self, game_over: bool) -> bool {
        if !game_over {
            self.waited = 0;
            false
        } else if self.waited >= self.restart_delay_frames {
            self.waited = 0;
            true
        } else {
            self.waited += 1;
            false
        }
    }
}

/// A session driven by an injected time source
pub struct Game<T: TimeSource> {
    pub state: GameState,
    time: T,
    clock: FrameClock,
    frames: u64,
}

impl<T: TimeSource> Game<T> {
    pub fn new(seed: u64, time: T) -> Self {
        Self::from_state(GameState::new(seed), time)
    }

    pub fn with_tuning(seed: u64, tuning: Tuning, time: T) -> Result<Self, ConfigError> {
        Ok(Self::from_state(GameState::with_tuning(seed, tuning)?, time))
    }

    fn from_state(state: GameState, time: T) -> Self {
        Self {
            clock: FrameClock::new(state.tuning.max_frame_dt),
            state,
            time,
            frames: 0,
        }
    }

    /// Run one display frame
    pub fn frame(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
    ) -> Vec<GameEvent> {
        let now = self.time.now_seconds();
        let dt = self.clock.tick(now);
        self.frames += 1;

        let game_over = self.state.is_game_over();
        if input.take_restart(game_over) && game_over {
            self.state.restart();
        }

        let tick_input = input.poll(&self.state.snapshot());
        let events = self.state.update(&tick_input, dt);

        renderer.draw(&self.state.snapshot());
        events
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn time_source(&mut self) -> &mut T {
        &mut self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Enemy, ManualClock};
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Snapshot>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, snapshot: &Snapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    fn kill_player(game: &mut Game<ManualClock>) {
        game.state.player.health = 1;
        let p = game.state.player.pos;
        game.state.enemies.push(Enemy {
            pos: p,
            radius: 14.0,
            speed: 50.0,
        });
    }

    #[test]
    fn test_frame_draws_post_update_snapshot() {
        let mut game = Game::new(1, ManualClock::stepping(1.0 / 60.0));
        let mut input = InputState::new(Vec2::new(400.0, 0.0));
        let mut renderer = Recorder::default();

        game.frame(&mut input, &mut renderer);
        game.frame(&mut input, &mut renderer);

        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.frames[1], game.state.snapshot());
        assert_eq!(game.frames(), 2);
    }

    #[test]
    fn test_with_tuning_rejects_unplayable_field() {
        let game = Game::with_tuning(1, Tuning::with_field(20.0, 20.0), ManualClock::default());
        assert!(matches!(game, Err(ConfigError::Invalid(_))));

        let tuning = Tuning {
            max_frame_dt: 0.1,
            ..Tuning::default()
        };
        let mut game = Game::with_tuning(1, tuning, ManualClock::default()).unwrap();
        let mut input = InputState::new(Vec2::ZERO);
        input.key_down(crate::platform::Key::D);
        let mut renderer = Recorder::default();
        game.frame(&mut input, &mut renderer);
        let start = game.state.player.pos;
        game.time_source().advance(10.0);
        game.frame(&mut input, &mut renderer);
        let moved = game.state.player.pos.x - start.x;
        assert!((moved - game.state.tuning.player_speed * 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_stalled_clock_is_clamped() {
        let mut game = Game::new(1, ManualClock::default());
        let mut input = InputState::new(Vec2::ZERO);
        input.key_down(crate::platform::Key::D);
        let mut renderer = Recorder::default();

        game.frame(&mut input, &mut renderer);
        let start = game.state.player.pos;
        // Ten-second hitch between frames
        game.time_source().advance(10.0);
        game.frame(&mut input, &mut renderer);

        let moved = game.state.player.pos.x - start.x;
        assert!((moved - game.state.tuning.player_speed * 0.05).abs() < 1e-3);
    }

    #[test]
    fn test_click_restarts_only_after_game_over() {
        let mut game = Game::new(1, ManualClock::stepping(0.016));
        let mut input = InputState::new(Vec2::ZERO);
        let mut renderer = Recorder::default();

        game.state.score = 4;
        input.click();
        game.frame(&mut input, &mut renderer);
        assert_eq!(game.state.score, 4);

        kill_player(&mut game);
        game.frame(&mut input, &mut renderer);
        assert!(game.state.is_game_over());
        assert!(renderer.frames.last().unwrap().game_over);

        // The click made during play was not kept around
        game.frame(&mut input, &mut renderer);
        assert!(game.state.is_game_over());

        input.click();
        game.frame(&mut input, &mut renderer);
        assert!(!game.state.is_game_over());
        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.health(), game.state.tuning.start_health);
    }

    #[test]
    fn test_autopilot_restarts_after_delay() {
        let mut game = Game::new(9, ManualClock::stepping(0.016));
        let mut pilot = Autopilot::new(2);
        let mut renderer = Recorder::default();

        kill_player(&mut game);
        game.frame(&mut pilot, &mut renderer);
        assert!(game.state.is_game_over());

        game.frame(&mut pilot, &mut renderer);
        game.frame(&mut pilot, &mut renderer);
        assert!(game.state.is_game_over());
        game.frame(&mut pilot, &mut renderer);
        assert!(!game.state.is_game_over());
    }
}
