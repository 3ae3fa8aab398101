pub mod ball;
pub mod button;
pub mod canvas;
pub mod config;
pub mod geometry;
pub mod input;
pub mod paddle;
pub mod session;
pub mod state;

pub use ball::{Ball, BallOutcome};
pub use button::Button;
pub use canvas::{Canvas, Color, Draw, DrawCommand, RecordingCanvas, TextAnchor};
pub use config::{ConfigError, GameConfig};
pub use geometry::{Rect, Vector2};
pub use input::{InputState, Key};
pub use paddle::{Controls, Paddle, PlayerId};
pub use session::Session;
pub use state::GameState;

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 640.0;
pub const TARGET_FPS: u32 = 60;
/// Largest delta the simulation accepts for one frame, in seconds.
pub const MAX_FRAME_DELTA: f32 = 1.0 / 20.0;

pub const BALL_SPEED: f32 = 500.0;
/// Vertical share of the serve speed.
pub const BALL_VERTICAL_FACTOR: f32 = 0.4;
pub const BALL_RADIUS: f32 = 30.0;

pub const PADDLE_WIDTH: f32 = 25.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
pub const PADDLE_SPEED: f32 = 400.0;
/// Distance from a paddle's center to its own side of the screen.
pub const PADDLE_OFFSET_X: f32 = 50.0;
/// Gap kept between a paddle and the top/bottom edges.
pub const PADDLE_INSET: f32 = 10.0;

pub const OUT_OF_BOUNDS_MARGIN: f32 = 50.0;
pub const PADDLE_TOLERANCE: f32 = 10.0;
/// Farthest the ball travels along either axis between two collision checks.
/// Must stay below `PADDLE_TOLERANCE` or the ball can skip a paddle face.
pub const MAX_BALL_STEP: f32 = 8.0;
pub const WALL_INSET: f32 = 1.0;

pub const COUNTDOWN_SECONDS: f32 = 0.33;

pub const BUTTON_WIDTH: f32 = 400.0;
pub const BUTTON_HEIGHT: f32 = 150.0;
pub const BUTTON_OUTLINE: f32 = 10.0;
pub const BUTTON_FONT_SIZE: f32 = 150.0;

pub const SCORE_FONT_SIZE: f32 = 50.0;
pub const SCORE_OFFSET_X: f32 = 100.0;
pub const SCORE_Y: f32 = 25.0;
pub const COUNTDOWN_FONT_SIZE: f32 = 50.0;
pub const COUNTDOWN_TEXT_Y: f32 = 200.0;
pub const MIDLINE_WIDTH: f32 = 4.0;
