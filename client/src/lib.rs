//! # Pong Client Library
//!
//! This library provides the desktop frontend for the two-player Pong game.
//! It owns the window, samples the keyboard and mouse, paces frames, and
//! draws the game. All game rules live in the backend-free `pong` crate;
//! this crate only connects them to `macroquad`.
//!
//! ## Architecture Overview
//!
//! Every frame runs the same fixed sequence on a single thread:
//!
//! 1. Poll input and stop if the window asked to close
//! 2. Compute the delta time since the previous frame, capped to keep the
//!    simulation stable after a stall
//! 3. Clear the frame
//! 4. Advance the session and draw whatever its current state shows, in
//!    fixed field coordinates stretched over the window
//! 5. Present the frame and sleep out the rest of the frame budget
//!
//! ## Module Organization
//!
//! ### App Module (`app`)
//! The main loop:
//! - Frame timing and delta clamping
//! - Frame pacing to the target rate
//! - Quit handling
//!
//! ### Input Module (`input`)
//! Translates macroquad state into a `pong::InputState` snapshot:
//! - Paddle keys (W/S and Up/Down)
//! - Pointer position and primary button for the start screen
//! - Edge detection for the debug toggle key
//!
//! ### Rendering Module (`rendering`)
//! Implements `pong::Canvas` on top of macroquad's drawing functions and
//! maps the window onto the fixed playing field.
//!
//! ### Frame Graph Module (`frame_graph`)
//! Optional overlay plotting frame times against the frame budget.
//!
//! ## Usage Example
//!
//! ```no_run
//! use client::app::App;
//! use pong::GameConfig;
//!
//! let config = GameConfig::default();
//! macroquad::Window::from_config(macroquad::conf::Conf::default(), async move {
//!     App::new(&config, false).run().await;
//! });
//! ```

pub mod app;
pub mod frame_graph;
pub mod input;
pub mod rendering;
