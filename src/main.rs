//! Swarm Shooter entry point
//!
//! Native builds have no window; they run a headless attract-mode session on a
//! simulated 60 Hz clock, projecting every frame through the draw-list
//! renderer and logging the HUD.

use swarm_shooter::game::Autopilot;
use swarm_shooter::renderer::{Frame, build_frame};
use swarm_shooter::settings::QualityPreset;
use swarm_shooter::sim::{GameEvent, ManualClock, Snapshot};
use swarm_shooter::{Game, Renderer, Settings, Tuning};

/// Simulated seconds to run
const RUN_SECONDS: u32 = 120;
const FRAME_RATE: u32 = 60;

/// Renderer that builds draw lists and reports the HUD once a second
struct LogRenderer {
    settings: Settings,
    frames: u64,
    last: Option<Frame>,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        let frame = build_frame(snapshot, &self.settings);
        if self.frames % FRAME_RATE as u64 == 0 {
            let hud: Vec<&str> = frame.text.iter().map(|t| t.text.as_str()).collect();
            log::info!(
                "[{}s] {} | enemies={} bullets={} vertices={}",
                self.frames / FRAME_RATE as u64,
                hud.join(" "),
                snapshot.enemies.len(),
                snapshot.bullets.len(),
                frame.vertices.len()
            );
        }
        self.frames += 1;
        self.last = Some(frame);
    }
}

/// Tuning from `SWARM_TUNING` (JSON), falling back to defaults
fn load_tuning() -> Tuning {
    match std::env::var("SWARM_TUNING") {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from SWARM_TUNING");
                tuning
            }
            Err(e) => {
                log::error!("Ignoring SWARM_TUNING: {}", e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    }
}

/// Renderer preferences from the `SWARM_QUALITY` preset name
fn load_settings() -> Settings {
    let quality = match std::env::var("SWARM_QUALITY") {
        Ok(name) => QualityPreset::from_name(&name).unwrap_or_else(|| {
            log::warn!("Unknown SWARM_QUALITY '{}', using Medium", name);
            QualityPreset::Medium
        }),
        Err(_) => QualityPreset::default(),
    };
    log::info!("Quality preset: {}", quality.as_str());
    Settings::from_preset(quality)
}

fn main() {
    env_logger::init();
    log::info!("Swarm Shooter (native) starting...");
    log::info!("Native mode runs headless attract mode");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let clock = ManualClock::stepping(1.0 / FRAME_RATE as f64);
    let mut game = match Game::with_tuning(seed, load_tuning(), clock.clone()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Falling back to default tuning: {}", e);
            Game::new(seed, clock)
        }
    };
    let mut pilot = Autopilot::new(FRAME_RATE * 2);
    let mut renderer = LogRenderer {
        settings: load_settings(),
        frames: 0,
        last: None,
    };

    let mut best = 0;
    let mut runs = 1;
    for _ in 0..RUN_SECONDS * FRAME_RATE {
        for event in game.frame(&mut pilot, &mut renderer) {
            if let GameEvent::GameOver { score } = event {
                best = best.max(score);
                runs += 1;
            }
        }
    }
    best = best.max(game.state.score());

    let bytes = renderer.last.as_ref().map(|f| f.vertex_bytes().len()).unwrap_or(0);
    let elapsed = game.time_source().now;
    println!(
        "\n{} frames over {:.1}s, {} session(s), best score {} (last frame {} vertex bytes)",
        game.frames(),
        elapsed,
        runs,
        best,
        bytes
    );
}
