use crate::COUNTDOWN_SECONDS;
use std::fmt;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameState {
    Start,
    /// Serve pause; play resumes once `remaining` runs out.
    Countdown {
        remaining: f32,
    },
    Playing,
}

impl GameState {
    /// A fresh serve countdown.
    pub fn countdown() -> Self {
        GameState::Countdown {
            remaining: COUNTDOWN_SECONDS,
        }
    }

    /// Burns `dt` off a countdown. Switches to `Playing` once nothing is left;
    /// other states pass through unchanged.
    pub fn tick(self, dt: f32) -> Self {
        match self {
            GameState::Countdown { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    GameState::Playing
                } else {
                    GameState::Countdown { remaining }
                }
            }
            other => other,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Playing)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameState::Start => "start",
            GameState::Countdown { .. } => "countdown",
            GameState::Playing => "playing",
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Start
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Countdown { remaining } => write!(f, "countdown ({:.2}s)", remaining),
            other => f.write_str(other.name()),
        }
    }
}
