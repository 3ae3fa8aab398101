//! One running game: both paddles, the ball, and the state machine that
//! decides which of them move and draw each frame.

use crate::ball::{Ball, BallOutcome};
use crate::button::Button;
use crate::canvas::{Canvas, Color, Draw, TextAnchor};
use crate::config::GameConfig;
use crate::geometry::{Rect, Vector2};
use crate::input::InputState;
use crate::paddle::{Paddle, PlayerId};
use crate::state::GameState;
use crate::{COUNTDOWN_FONT_SIZE, COUNTDOWN_TEXT_Y, MIDLINE_WIDTH};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Session {
    paddles: [Paddle; 2],
    ball: Ball,
    state: GameState,
    screen: Vector2,
    delta: f32,
    start_button: Button,
    rng: StdRng,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let screen = config.screen();

        Self {
            paddles: [
                Paddle::new(PlayerId::One, screen),
                Paddle::new(PlayerId::Two, screen),
            ],
            ball: Ball::new(screen, &mut rng),
            state: GameState::Start,
            screen,
            delta: 0.0,
            start_button: Button::new("Start", screen),
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn screen(&self) -> Vector2 {
        self.screen
    }

    /// Delta of the most recent update.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddles(&self) -> &[Paddle; 2] {
        &self.paddles
    }

    pub fn paddle(&self, id: PlayerId) -> &Paddle {
        &self.paddles[id.index()]
    }

    pub fn paddle_mut(&mut self, id: PlayerId) -> &mut Paddle {
        &mut self.paddles[id.index()]
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.paddles[0].score(), self.paddles[1].score())
    }

    pub fn start_button(&self) -> &Button {
        &self.start_button
    }

    /// Advances the session by one frame.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.delta = dt;

        match self.state {
            GameState::Start => {
                if self.start_button.clicked(input) {
                    self.transition(GameState::countdown());
                }
            }
            GameState::Countdown { .. } => {
                let next = self.state.tick(dt);
                if next.is_playing() {
                    self.transition(next);
                } else {
                    self.state = next;
                }
            }
            GameState::Playing => self.play(input, dt),
        }
    }

    fn play(&mut self, input: &InputState, dt: f32) {
        let screen_height = self.screen.y;
        for paddle in &mut self.paddles {
            paddle.update(input, dt, screen_height);
        }

        if let BallOutcome::Scored(scorer) = self.ball.update(dt, self.screen, &self.paddles) {
            self.score_point(scorer);
        }
    }

    fn score_point(&mut self, scorer: PlayerId) {
        for paddle in &mut self.paddles {
            paddle.recenter(self.screen.y);
        }
        self.paddles[scorer.index()].award_point();
        self.ball.reset(self.screen, &mut self.rng);

        let (one, two) = self.scores();
        info!("Point to {} ({} - {})", scorer, one, two);

        self.transition(GameState::countdown());
    }

    fn transition(&mut self, next: GameState) {
        info!("State {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    fn draw_field<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill_rect(
            Rect::new(
                self.screen.x / 2.0 - MIDLINE_WIDTH / 2.0,
                0.0,
                MIDLINE_WIDTH,
                self.screen.y,
            ),
            Color::WHITE,
        );

        for paddle in &self.paddles {
            paddle.draw(canvas);
        }
        self.ball.draw(canvas);
        for paddle in &self.paddles {
            paddle.draw_score(canvas, self.screen.x);
        }
    }
}

impl Draw for Session {
    fn draw<C: Canvas>(&self, canvas: &mut C) {
        match self.state {
            GameState::Start => self.start_button.draw(canvas),
            GameState::Countdown { remaining } => {
                self.draw_field(canvas);
                canvas.draw_text(
                    &format!("{:.2}", remaining.max(0.0)),
                    TextAnchor::TopCenter(Vector2::new(self.screen.x / 2.0, COUNTDOWN_TEXT_Y)),
                    COUNTDOWN_FONT_SIZE,
                    Color::PINK,
                );
            }
            GameState::Playing => self.draw_field(canvas),
        }
    }
}
