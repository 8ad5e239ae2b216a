//! Draw-list renderer
//!
//! Projects a simulation `Snapshot` into colored triangles plus text items.
//! Stateless: the same snapshot and settings always give the same frame. The
//! host uploads `Frame::vertex_bytes()` and lays out the text however its
//! backend prefers.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::Snapshot;
pub use vertex::{DEFAULT_PALETTE, HIGH_CONTRAST_PALETTE, Palette, Vertex};

/// Horizontal anchoring of a text item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

/// A line of text to draw over the shapes
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// Baseline anchor in field units
    pub pos: Vec2,
    /// Pixel size
    pub size: f32,
    pub align: TextAlign,
    pub color: [f32; 4],
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: [f32; 4],
    /// Triangle list, back to front
    pub vertices: Vec<Vertex>,
    /// Drawn after the vertices
    pub text: Vec<TextItem>,
}

impl Frame {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

const HUD_SIZE: f32 = 16.0;
const BANNER_SIZE: f32 = 36.0;
const PROMPT_SIZE: f32 = 18.0;

/// Build the draw list for a snapshot
pub fn build_frame(snapshot: &Snapshot, settings: &Settings) -> Frame {
    let palette = if settings.high_contrast {
        HIGH_CONTRAST_PALETTE
    } else {
        DEFAULT_PALETTE
    };
    let segments = settings.circle_segments();
    let mut vertices = Vec::new();
    let mut text = Vec::new();

    for b in &snapshot.bullets {
        vertices.extend(shapes::circle(b.pos, b.radius, palette.bullet, segments));
    }

    for e in &snapshot.enemies {
        vertices.extend(shapes::circle(e.pos, e.radius, palette.enemy, segments));
    }

    let player = &snapshot.player;
    vertices.extend(shapes::ship(player.pos, player.angle, palette.player));
    vertices.extend(shapes::circle(
        player.pos,
        shapes::SHIP_CORE_RADIUS,
        palette.player_core,
        segments,
    ));

    if settings.show_hud {
        text.push(TextItem {
            text: format!("Score: {}", snapshot.score),
            pos: Vec2::new(10.0, 20.0),
            size: HUD_SIZE,
            align: TextAlign::Start,
            color: palette.hud_text,
        });
        text.push(TextItem {
            text: format!("Health: {}", snapshot.health()),
            pos: Vec2::new(10.0, 40.0),
            size: HUD_SIZE,
            align: TextAlign::Start,
            color: palette.hud_text,
        });
    }

    if snapshot.game_over {
        let mut overlay = palette.overlay;
        overlay[3] = settings.overlay_opacity;
        vertices.extend(shapes::rect(Vec2::ZERO, snapshot.field, overlay));

        let center = snapshot.field / 2.0;
        text.push(TextItem {
            text: "GAME OVER".to_string(),
            pos: center + Vec2::new(0.0, -10.0),
            size: BANNER_SIZE,
            align: TextAlign::Center,
            color: palette.banner_text,
        });
        text.push(TextItem {
            text: "Click to restart".to_string(),
            pos: center + Vec2::new(0.0, 24.0),
            size: PROMPT_SIZE,
            align: TextAlign::Center,
            color: palette.banner_text,
        });
    }

    Frame {
        clear_color: palette.background,
        vertices,
        text,
    }
}
