//! Drawing seam between the game and whatever backend presents frames

use crate::geometry::{Rect, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const BACKGROUND: Color = Color::rgb(0x22, 0x22, 0x22);
    pub const BALL: Color = Color::rgb(0xF6, 0x51, 0x7A);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Where a string is placed relative to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Horizontally centered on `x`, top edge at `y`.
    TopCenter(Vector2),
    /// Centered on both axes.
    Center(Vector2),
}

/// Drawing surface the session renders into once per frame.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);
    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, anchor: TextAnchor, font_size: f32, color: Color);
}

/// Anything that can put itself on a canvas.
pub trait Draw {
    fn draw<C: Canvas>(&self, canvas: &mut C);
}

/// A draw call captured by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
    StrokeRect(Rect, f32, Color),
    FillCircle(Vector2, f32, Color),
    Text(String, TextAnchor, f32, Color),
}

/// Headless canvas that records every call. Used for tests and benchmarks.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// All strings drawn since the last reset, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillCircle(..)))
            .count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.commands
            .push(DrawCommand::StrokeRect(rect, thickness, color));
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::FillCircle(center, radius, color));
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text(
            text.to_string(),
            anchor,
            font_size,
            color,
        ));
    }
}
