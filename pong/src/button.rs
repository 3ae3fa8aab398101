//! Start screen control

use crate::canvas::{Canvas, Color, Draw, TextAnchor};
use crate::geometry::{Rect, Vector2};
use crate::input::InputState;
use crate::{BUTTON_FONT_SIZE, BUTTON_HEIGHT, BUTTON_OUTLINE, BUTTON_WIDTH};

/// Static labeled rectangle with level-triggered activation.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub rect: Rect,
}

impl Button {
    pub fn new(label: &str, screen: Vector2) -> Self {
        Self {
            label: label.to_string(),
            rect: Rect::from_center(
                Vector2::new(screen.x / 2.0, screen.y / 2.0),
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        }
    }

    pub fn hovered(&self, pointer: Vector2) -> bool {
        self.rect.contains(pointer)
    }

    /// True on every frame the primary button is held over the control, not
    /// only on the frame it went down.
    pub fn clicked(&self, input: &InputState) -> bool {
        input.primary_down && self.hovered(input.pointer)
    }
}

impl Draw for Button {
    fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.stroke_rect(self.rect, BUTTON_OUTLINE, Color::WHITE);
        canvas.draw_text(
            &self.label,
            TextAnchor::Center(self.rect.center()),
            BUTTON_FONT_SIZE,
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn start_button() -> Button {
        Button::new("Start", Vector2::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn test_button_bounds() {
        let button = start_button();
        assert_eq!(button.rect, Rect::new(440.0, 245.0, 400.0, 150.0));
    }

    #[test]
    fn test_clicked_requires_press_and_hover() {
        let button = start_button();

        assert!(button.clicked(&InputState::default().with_pointer(600.0, 300.0, true)));
        assert!(!button.clicked(&InputState::default().with_pointer(600.0, 300.0, false)));
        assert!(!button.clicked(&InputState::default().with_pointer(100.0, 100.0, true)));
    }

    #[test]
    fn test_clicked_is_level_triggered() {
        let button = start_button();
        let held = InputState::default().with_pointer(600.0, 300.0, true);
        for _ in 0..3 {
            assert!(button.clicked(&held));
        }
    }

    #[test]
    fn test_draw_outline_and_label() {
        let button = start_button();
        let mut canvas = RecordingCanvas::new();
        button.draw(&mut canvas);

        assert_eq!(
            canvas.commands[0],
            DrawCommand::StrokeRect(button.rect, BUTTON_OUTLINE, Color::WHITE)
        );
        assert_eq!(canvas.texts(), vec!["Start"]);
    }
}
