use crate::frame_graph::FrameGraph;
use crate::input::InputManager;
use crate::rendering::Renderer;
use log::{info, warn};
use macroquad::prelude::*;
use pong::{Canvas, Draw, GameConfig, Session, MAX_FRAME_DELTA};
use std::time::Duration;

/// Time left unslept each frame so the buffer swap can catch the next vsync
pub const PACING_MARGIN: f64 = 0.002;

pub struct App {
    session: Session,
    input_manager: InputManager,
    renderer: Renderer,
    frame_graph: FrameGraph,

    frame_budget: f64,
    last_frame: f64,
}

impl App {
    pub fn new(config: &GameConfig, show_graph: bool) -> Self {
        let mut frame_graph = FrameGraph::new(config.target_fps);
        if show_graph {
            frame_graph.toggle_visibility();
        }

        App {
            session: Session::new(config),
            input_manager: InputManager::new(),
            renderer: Renderer::new(config.screen()),
            frame_graph,
            frame_budget: config.frame_budget(),
            last_frame: 0.0,
        }
    }

    /// Runs frames until the window asks to close.
    pub async fn run(&mut self) {
        // Closing the window becomes an input event instead of an exit
        prevent_quit();
        self.last_frame = get_time();

        loop {
            let frame_start = get_time();

            let (graph_toggle, input) = self.input_manager.update(&self.renderer);
            if input.quit_requested {
                info!("Quit requested, shutting down");
                break;
            }
            if graph_toggle {
                self.frame_graph.toggle_visibility();
                info!("Frame graph: {}", self.frame_graph.is_visible());
            }

            let (dt, frame_ms) = frame_timing(frame_start - self.last_frame);
            self.last_frame = frame_start;

            self.renderer.clear(pong::Color::BACKGROUND);
            self.renderer.begin_field();
            self.session.update(&input, dt);
            self.session.draw(&mut self.renderer);
            self.renderer.end_field();

            self.frame_graph.record_frame(frame_ms, frame_start);
            self.frame_graph.render();

            self.cap_fps(get_time() - frame_start);
            next_frame().await;
        }
    }

    fn cap_fps(&self, took: f64) {
        if let Some(remaining) = remaining_budget(self.frame_budget, took) {
            #[cfg(not(target_arch = "wasm32"))]
            std::thread::sleep(remaining);
            #[cfg(target_arch = "wasm32")]
            let _ = remaining;
        }
    }
}

/// Splits a raw frame gap into the simulation delta (seconds, capped) and
/// the measured frame time (milliseconds, uncapped) for the graph
pub fn frame_timing(raw: f64) -> (f32, f32) {
    (clamp_delta(raw), (raw.max(0.0) * 1000.0) as f32)
}

/// Converts a raw frame gap to the delta the simulation sees
pub fn clamp_delta(raw: f64) -> f32 {
    let max = MAX_FRAME_DELTA as f64;
    if raw > max {
        warn!(
            "Large delta time detected ({:.3}s), capping to {:.3}s",
            raw, max
        );
        MAX_FRAME_DELTA
    } else {
        raw.max(0.0) as f32
    }
}

fn remaining_budget(budget: f64, took: f64) -> Option<Duration> {
    let left = budget - took - PACING_MARGIN;
    if left > 0.0 {
        Some(Duration::from_secs_f64(left))
    } else {
        None
    }
}
