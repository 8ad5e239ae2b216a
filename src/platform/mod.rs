//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (keyboard, pointer, buttons)
//! - Screen-to-field coordinate transforms

pub mod input;

pub use input::{InputState, Key, ScreenRect};
