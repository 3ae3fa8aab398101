//! Samples macroquad's keyboard, mouse and window state into a game input snapshot

use crate::rendering::Renderer;
use macroquad::prelude::*;
use pong::InputState;

/// Collects per-frame input and edge-detects the debug toggle key
pub struct InputManager {
    // Previous frame key state for edge detection
    prev_key_g: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self { prev_key_g: false }
    }

    /// Returns (graph_toggle, input) for the current frame, with the
    /// pointer already in field coordinates
    pub fn update(&mut self, renderer: &Renderer) -> (bool, InputState) {
        let (pointer_x, pointer_y) = mouse_position();

        let input = InputState {
            w: is_key_down(KeyCode::W),
            s: is_key_down(KeyCode::S),
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            pointer: renderer.to_field(pong::Vector2::new(pointer_x, pointer_y)),
            primary_down: is_mouse_button_down(MouseButton::Left),
            quit_requested: is_quit_requested(),
        };

        let graph_toggle = rising_edge(is_key_down(KeyCode::G), &mut self.prev_key_g);

        (graph_toggle, input)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// True only on the frame `current` goes from released to held
fn rising_edge(current: bool, previous: &mut bool) -> bool {
    let pressed = current && !*previous;
    *previous = current;
    pressed
}
