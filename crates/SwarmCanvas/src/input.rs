//! # Input Protocol
//!
//! This module defines the input state that the host application must pass to
//! the stage every frame. It includes mouse position, button edges, scroll
//! delta, keys, and the UI capture flags that gate world gestures.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// State of mouse buttons (held this frame).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct MouseButtons {
    /// Left mouse button is pressed.
    pub left: bool,
    /// Right mouse button is pressed.
    pub right: bool,
    /// Middle mouse button is pressed.
    pub middle: bool,
}

impl MouseButtons {
    /// Any button is held.
    pub fn any(&self) -> bool {
        self.left || self.right || self.middle
    }
}

/// Keyboard keys the stage cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Toggle run/pause.
    Space,
    /// Reset the simulation to the current configuration.
    Backspace,
    /// Request quit.
    Escape,
}

/// The input state for a single frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputState {
    /// Current position of the mouse cursor in Screen Space (pixels).
    pub mouse_pos: Vec2,
    /// Buttons currently held.
    pub mouse_buttons: MouseButtons,
    /// Left button went down this frame.
    pub left_pressed: bool,
    /// Right button went down this frame.
    pub right_pressed: bool,
    /// Vertical scroll delta this frame (positive = up / zoom in).
    pub scroll_delta: f32,
    /// Keys that went down this frame.
    pub pressed_keys: Vec<Key>,
    /// Size of the viewport in Screen Space (pixels).
    pub screen_size: Vec2,
    /// Monotonic clock in seconds, used to pair presses into double-clicks.
    pub time: f32,
    /// The host UI currently wants the pointer (hovering or dragging a
    /// widget). World gestures (camera, obstacle authoring) are suppressed.
    pub ui_captured_mouse: bool,
    /// The host UI currently wants the keyboard (e.g. an active text field).
    pub ui_captured_keyboard: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            mouse_buttons: MouseButtons::default(),
            left_pressed: false,
            right_pressed: false,
            scroll_delta: 0.0,
            pressed_keys: Vec::new(),
            screen_size: Vec2::new(1280.0, 768.0),
            time: 0.0,
            ui_captured_mouse: false,
            ui_captured_keyboard: false,
        }
    }
}
