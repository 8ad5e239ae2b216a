//! Polled input state
//!
//! Host event handlers write into an `InputState`; the frame loop reads it as
//! an always-current snapshot. WASD and the arrow keys are merged with OR, so
//! holding both `w` and `ArrowUp` is the same as holding one.

use glam::Vec2;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
}

impl Key {
    /// Map a browser-style key name (`KeyboardEvent.key`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowRight" => Some(Key::ArrowRight),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// On-screen placement of the field (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Convert a screen-space point to field units
    pub fn to_field(&self, screen: Vec2, field: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x - self.left) * (field.x / self.width),
            (screen.y - self.top) * (field.y / self.height),
        )
    }
}

/// Primary (left) mouse button
pub const PRIMARY_BUTTON: i16 = 0;

/// Current input, updated by host events
#[derive(Debug, Clone)]
pub struct InputState {
    held: [bool; 8],
    /// Pointer position in field units
    pub pointer: Vec2,
    /// Primary button held
    pub fire: bool,
    restart_requested: bool,
}

impl InputState {
    /// Fresh input with the pointer resting at `pointer`
    pub fn new(pointer: Vec2) -> Self {
        Self {
            held: [false; 8],
            pointer,
            fire: false,
            restart_requested: false,
        }
    }

    pub fn key_down(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Key event by browser key name; unknown keys are ignored
    pub fn key_event(&mut self, name: &str, pressed: bool) {
        if let Some(key) = Key::from_name(name) {
            if pressed {
                self.key_down(key);
            } else {
                self.key_up(key);
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn pointer_moved(&mut self, screen: Vec2, rect: &ScreenRect, field: Vec2) {
        self.pointer = rect.to_field(screen, field);
    }

    pub fn button_down(&mut self, button: i16) {
        if button == PRIMARY_BUTTON {
            self.fire = true;
        }
    }

    pub fn button_up(&mut self, button: i16) {
        if button == PRIMARY_BUTTON {
            self.fire = false;
        }
    }

    /// A click; only acted on while the session is over
    pub fn click(&mut self) {
        self.restart_requested = true;
    }

    /// Consume a pending restart request
    ///
    /// Requests made during play are dropped rather than held for later.
    pub fn take_restart(&mut self, game_over: bool) -> bool {
        let requested = std::mem::take(&mut self.restart_requested);
        requested && game_over
    }

    /// Input for the simulation this frame
    pub fn tick_input(&self) -> crate::sim::TickInput {
        crate::sim::TickInput {
            move_up: self.is_held(Key::W) || self.is_held(Key::ArrowUp),
            move_down: self.is_held(Key::S) || self.is_held(Key::ArrowDown),
            move_left: self.is_held(Key::A) || self.is_held(Key::ArrowLeft),
            move_right: self.is_held(Key::D) || self.is_held(Key::ArrowRight),
            pointer: self.pointer,
            fire: self.fire,
        }
    }
}
