use macroquad::prelude::*;
use pong::{Canvas, TextAnchor};

/// Draws the game through macroquad's immediate-mode API.
///
/// Game coordinates span a fixed field; a camera stretches that field over
/// whatever the window's size is.
pub struct Renderer {
    field: pong::Vector2,
    camera: Camera2D,
}

impl Renderer {
    pub fn new(field: pong::Vector2) -> Self {
        // Negative height keeps y pointing down, like screen space
        let camera = Camera2D::from_display_rect(Rect::new(0.0, field.y, field.x, -field.y));
        Renderer { field, camera }
    }

    /// Switches drawing to field coordinates for the game.
    pub fn begin_field(&self) {
        set_camera(&self.camera);
    }

    /// Back to window pixels for overlays.
    pub fn end_field(&self) {
        set_default_camera();
    }

    /// Converts a pointer position in window pixels to field units.
    pub fn to_field(&self, pointer: pong::Vector2) -> pong::Vector2 {
        scale_point(
            pointer,
            pong::Vector2::new(screen_width(), screen_height()),
            self.field,
        )
    }
}

impl Canvas for Renderer {
    fn clear(&mut self, color: pong::Color) {
        clear_background(to_macroquad(color));
    }

    fn fill_rect(&mut self, rect: pong::Rect, color: pong::Color) {
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, to_macroquad(color));
    }

    fn stroke_rect(&mut self, rect: pong::Rect, thickness: f32, color: pong::Color) {
        draw_rectangle_lines(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            thickness,
            to_macroquad(color),
        );
    }

    fn fill_circle(&mut self, center: pong::Vector2, radius: f32, color: pong::Color) {
        draw_circle(center.x, center.y, radius, to_macroquad(color));
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, font_size: f32, color: pong::Color) {
        let dims = measure_text(text, None, font_size as u16, 1.0);
        let (x, y) = text_origin(anchor, dims.width, dims.height, dims.offset_y);
        draw_text(text, x, y, font_size, to_macroquad(color));
    }
}

fn to_macroquad(color: pong::Color) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

fn scale_point(point: pong::Vector2, window: pong::Vector2, field: pong::Vector2) -> pong::Vector2 {
    if window.x <= 0.0 || window.y <= 0.0 {
        return point;
    }
    pong::Vector2::new(point.x * field.x / window.x, point.y * field.y / window.y)
}

/// macroquad places text by its baseline; `offset_y` is the baseline's
/// distance from the top of the glyph box.
fn text_origin(anchor: TextAnchor, width: f32, height: f32, offset_y: f32) -> (f32, f32) {
    match anchor {
        TextAnchor::TopCenter(at) => (at.x - width / 2.0, at.y + offset_y),
        TextAnchor::Center(at) => (at.x - width / 2.0, at.y - height / 2.0 + offset_y),
    }
}
