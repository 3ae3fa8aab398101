//! Per-frame input snapshot handed to the session by the frontend

use crate::geometry::Vector2;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
}

/// Level-sampled input for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub w: bool,
    pub s: bool,
    pub up: bool,
    pub down: bool,
    pub pointer: Vector2,
    /// Primary pointer button is currently held.
    pub primary_down: bool,
    pub quit_requested: bool,
}

impl InputState {
    pub fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::W => self.w,
            Key::S => self.s,
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }

    /// Builder used by tests and replays.
    pub fn with_key(mut self, key: Key) -> Self {
        match key {
            Key::W => self.w = true,
            Key::S => self.s = true,
            Key::Up => self.up = true,
            Key::Down => self.down = true,
        }
        self
    }

    pub fn with_pointer(mut self, x: f32, y: f32, pressed: bool) -> Self {
        self.pointer = Vector2::new(x, y);
        self.primary_down = pressed;
        self
    }
}
