use crate::canvas::{Canvas, Color, Draw, TextAnchor};
use crate::geometry::{Rect, Vector2};
use crate::input::{InputState, Key};
use crate::{
    PADDLE_HEIGHT, PADDLE_INSET, PADDLE_OFFSET_X, PADDLE_SPEED, PADDLE_WIDTH, SCORE_FONT_SIZE,
    SCORE_OFFSET_X, SCORE_Y,
};
use std::fmt;

/// Which side a paddle plays on. `One` is on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn controls(self) -> Controls {
        match self {
            PlayerId::One => Controls {
                up: Key::W,
                down: Key::S,
            },
            PlayerId::Two => Controls {
                up: Key::Up,
                down: Key::Down,
            },
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub id: PlayerId,
    /// Top-left corner.
    pub position: Vector2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub controls: Controls,
    score: u32,
}

impl Paddle {
    /// Places the paddle on its own side, vertically centered.
    pub fn new(id: PlayerId, screen: Vector2) -> Self {
        let center_x = match id {
            PlayerId::One => PADDLE_OFFSET_X,
            PlayerId::Two => screen.x - PADDLE_OFFSET_X,
        };
        let rect = Rect::from_center(
            Vector2::new(center_x, screen.y / 2.0),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        );

        Self {
            id,
            position: Vector2::new(rect.x, rect.y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            controls: id.controls(),
            score: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn award_point(&mut self) {
        self.score += 1;
    }

    /// Moves along y only. Up wins when both keys are held.
    pub fn update(&mut self, input: &InputState, dt: f32, screen_height: f32) {
        let step = self.speed * dt;
        if input.is_key_down(self.controls.up) {
            self.position.y -= step;
        } else if input.is_key_down(self.controls.down) {
            self.position.y += step;
        }

        let max_top = screen_height - PADDLE_INSET - self.height;
        self.position.y = self.position.y.min(max_top).max(PADDLE_INSET);
    }

    pub fn recenter(&mut self, screen_height: f32) {
        self.position.y = screen_height / 2.0 - self.height / 2.0;
    }

    /// Score sits near the top of the paddle's own half.
    pub fn draw_score<C: Canvas>(&self, canvas: &mut C, screen_width: f32) {
        let center_x = if self.rect().center().x < screen_width / 2.0 {
            SCORE_OFFSET_X
        } else {
            screen_width - SCORE_OFFSET_X
        };
        canvas.draw_text(
            &self.score.to_string(),
            TextAnchor::TopCenter(Vector2::new(center_x, SCORE_Y)),
            SCORE_FONT_SIZE,
            Color::WHITE,
        );
    }
}

impl Draw for Paddle {
    fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill_rect(self.rect(), Color::WHITE);
    }
}
