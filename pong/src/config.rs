use crate::geometry::Vector2;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use std::error::Error;
use std::fmt;

pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 160;

/// Window and pacing options. Gameplay constants are not configurable.
///
/// The playing field is always `SCREEN_WIDTH` x `SCREEN_HEIGHT` units; the
/// window size only decides how large that field appears.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Fixed RNG seed for reproducible serves; random when `None`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: SCREEN_WIDTH as u32,
            window_height: SCREEN_HEIGHT as u32,
            target_fps: TARGET_FPS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Size of the logical playing field, independent of the window.
    pub fn screen(&self) -> Vector2 {
        Vector2::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn window(&self) -> Vector2 {
        Vector2::new(self.window_width as f32, self.window_height as f32)
    }

    /// Seconds one frame may take at the target rate.
    pub fn frame_budget(&self) -> f64 {
        1.0 / self.target_fps.max(1) as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    WindowTooSmall { width: u32, height: u32 },
    ZeroFrameRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WindowTooSmall { width, height } => write!(
                f,
                "window {}x{} is too small, need at least {}x{}",
                width, height, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT
            ),
            ConfigError::ZeroFrameRate => write!(f, "target frame rate must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
