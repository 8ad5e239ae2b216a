//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (field units) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes between consecutive vertices in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub player: [f32; 4],
    pub player_core: [f32; 4],
    pub bullet: [f32; 4],
    pub enemy: [f32; 4],
    pub hud_text: [f32; 4],
    /// Overlay tint; alpha comes from settings
    pub overlay: [f32; 4],
    pub banner_text: [f32; 4],
}

/// Convert a `0xRRGGBB` color to normalized RGBA
pub const fn rgb(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

pub const DEFAULT_PALETTE: Palette = Palette {
    background: rgb(0x0b0b0c),
    player: rgb(0x7fe0ff),
    player_core: rgb(0x0b1220),
    bullet: rgb(0xffd97a),
    enemy: rgb(0xff6b6b),
    hud_text: rgb(0xe6eef8),
    overlay: rgb(0x030303),
    banner_text: rgb(0xffffff),
};

pub const HIGH_CONTRAST_PALETTE: Palette = Palette {
    background: rgb(0x000000),
    player: rgb(0x00ffff),
    player_core: rgb(0x000000),
    bullet: rgb(0xffff00),
    enemy: rgb(0xff0000),
    hud_text: rgb(0xffffff),
    overlay: rgb(0x000000),
    banner_text: rgb(0xffffff),
};
