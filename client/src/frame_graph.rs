//! Frame-time graph for real-time performance diagnostics

use macroquad::prelude::*;
use std::collections::VecDeque;

/// One frame-time sample
#[derive(Debug, Clone)]
pub struct FrameMetrics {
    pub frame_ms: f32,
    /// Seconds since program start, as reported by `get_time`
    pub timestamp: f64,
}

/// Real-time frame-time graph
pub struct FrameGraph {
    // Historical data storage
    metrics_history: VecDeque<FrameMetrics>,
    max_samples: usize,
    sample_interval: f64,
    last_sample_time: f64,

    // Graph display settings
    graph_width: f32,
    graph_height: f32,
    visible: bool,
    internal_padding: f32,

    // Graph scaling
    budget_ms: f32,
    scale_max_ms: f32,
    auto_scale: bool,
}

impl FrameGraph {
    pub fn new(target_fps: u32) -> Self {
        let budget_ms = 1000.0 / target_fps.max(1) as f32;
        Self {
            metrics_history: VecDeque::new(),
            max_samples: 100,      // Store last 100 samples
            sample_interval: 0.1,  // Sample every 100ms
            last_sample_time: f64::NEG_INFINITY,

            graph_width: 300.0,
            graph_height: 120.0,
            visible: false,
            internal_padding: 12.0,

            budget_ms,
            scale_max_ms: budget_ms * 2.0,
            auto_scale: true,
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn samples(&self) -> usize {
        self.metrics_history.len()
    }

    pub fn scale_max_ms(&self) -> f32 {
        self.scale_max_ms
    }

    /// Most recent sampled frame time
    pub fn latest_ms(&self) -> Option<f32> {
        self.metrics_history.back().map(|m| m.frame_ms)
    }

    /// Record a finished frame; only one sample per interval is kept
    pub fn record_frame(&mut self, frame_ms: f32, now: f64) {
        if now - self.last_sample_time >= self.sample_interval {
            self.sample_metrics(frame_ms, now);
            self.last_sample_time = now;
        }
    }

    fn sample_metrics(&mut self, frame_ms: f32, now: f64) {
        self.metrics_history.push_back(FrameMetrics {
            frame_ms,
            timestamp: now,
        });

        while self.metrics_history.len() > self.max_samples {
            self.metrics_history.pop_front();
        }

        if self.auto_scale {
            self.update_auto_scale();
        }
    }

    fn update_auto_scale(&mut self) {
        let max_frame = self
            .metrics_history
            .iter()
            .map(|m| m.frame_ms)
            .fold(0.0f32, f32::max);

        // Never zoom in past twice the frame budget
        let desired_scale = (max_frame * 1.2).max(self.budget_ms * 2.0);

        // Smooth scale changes to prevent jittery scaling
        self.scale_max_ms = self.scale_max_ms * 0.9 + desired_scale * 0.1;
    }

    fn quality_color(&self, frame_ms: f32) -> Color {
        if frame_ms <= self.budget_ms * 1.1 {
            GREEN
        } else if frame_ms <= self.budget_ms * 2.0 {
            YELLOW
        } else if frame_ms <= self.budget_ms * 3.0 {
            ORANGE
        } else {
            RED
        }
    }

    /// Render the graph in the top-right corner
    pub fn render(&self) {
        if !self.visible || self.metrics_history.is_empty() {
            return;
        }

        let base_margin = 20.0;
        let label_space = 40.0;
        let legend_space = 40.0;

        let bg_x = screen_width() - self.graph_width - base_margin - label_space;
        let bg_y = base_margin + legend_space;

        let graph_x = bg_x + self.internal_padding;
        let graph_y = bg_y + self.internal_padding;

        self.draw_background(bg_x, bg_y);
        self.draw_legend(bg_x, bg_y);
        self.draw_budget_line(graph_x, graph_y);
        self.draw_frame_line(graph_x, graph_y);
        self.draw_labels(graph_x, graph_y);
    }

    fn draw_background(&self, x: f32, y: f32) {
        let background_padding = 8.0;
        let label_space = 40.0;
        let legend_space = 40.0;
        let bottom_space = 30.0;

        let width = self.graph_width + background_padding * 2.0 + label_space;
        let height = self.graph_height + legend_space + bottom_space;

        draw_rectangle(
            x - background_padding,
            y - legend_space,
            width,
            height,
            Color::from_rgba(0, 0, 0, 200),
        );
        draw_rectangle_lines(
            x - background_padding,
            y - legend_space,
            width,
            height,
            1.0,
            Color::from_rgba(120, 120, 120, 255),
        );
    }

    fn usable_size(&self) -> (f32, f32) {
        (
            self.graph_width - self.internal_padding * 2.0,
            self.graph_height - self.internal_padding * 2.0,
        )
    }

    fn value_y(&self, y: f32, frame_ms: f32) -> f32 {
        let (_, usable_height) = self.usable_size();
        y + usable_height - (frame_ms.min(self.scale_max_ms) / self.scale_max_ms * usable_height)
    }

    fn draw_budget_line(&self, x: f32, y: f32) {
        let (usable_width, _) = self.usable_size();
        let budget_y = self.value_y(y, self.budget_ms);
        draw_line(
            x,
            budget_y,
            x + usable_width,
            budget_y,
            1.0,
            Color::from_rgba(50, 120, 50, 255),
        );
    }

    fn draw_frame_line(&self, x: f32, y: f32) {
        if self.metrics_history.len() < 2 {
            return;
        }

        let (usable_width, _) = self.usable_size();
        let time_span = self.time_span();
        if time_span <= 0.0 {
            return;
        }

        let oldest = self.metrics_history[0].timestamp;
        for pair in self.metrics_history.iter().collect::<Vec<_>>().windows(2) {
            let (prev, curr) = (pair[0], pair[1]);

            let x1 = x + ((prev.timestamp - oldest) / time_span) as f32 * usable_width;
            let x2 = x + ((curr.timestamp - oldest) / time_span) as f32 * usable_width;

            draw_line(
                x1,
                self.value_y(y, prev.frame_ms),
                x2,
                self.value_y(y, curr.frame_ms),
                2.0,
                self.quality_color(curr.frame_ms),
            );
        }
    }

    fn draw_labels(&self, x: f32, y: f32) {
        let font_size = 11.0;
        let (usable_width, usable_height) = self.usable_size();

        for fraction in [0.0, 0.5, 1.0] {
            let level = self.scale_max_ms * fraction;
            draw_text(
                &format!("{:.0}ms", level),
                x + usable_width + 8.0,
                self.value_y(y, level) + 4.0,
                font_size,
                WHITE,
            );
        }

        if let Some(latest) = self.metrics_history.back() {
            let fps = if latest.frame_ms > 0.0 {
                1000.0 / latest.frame_ms
            } else {
                0.0
            };
            draw_text(
                &format!("Frame: {:.1}ms ({:.0} fps)", latest.frame_ms, fps),
                x - self.internal_padding,
                y + usable_height + 28.0,
                font_size,
                WHITE,
            );
        }
    }

    fn draw_legend(&self, x: f32, y: f32) {
        let legend_y = y - 30.0;
        draw_text("Frame Time (G to toggle)", x, legend_y, 11.0, WHITE);

        if let Some(latest) = self.metrics_history.back() {
            let verdict = if latest.frame_ms <= self.budget_ms * 1.1 {
                "On budget"
            } else {
                "Slow"
            };
            draw_text("Pacing:", x, legend_y + 12.0, 10.0, WHITE);
            draw_text(
                verdict,
                x + 40.0,
                legend_y + 12.0,
                10.0,
                self.quality_color(latest.frame_ms),
            );
        }
    }

    fn time_span(&self) -> f64 {
        match (self.metrics_history.front(), self.metrics_history.back()) {
            (Some(oldest), Some(newest)) => newest.timestamp - oldest.timestamp,
            _ => 0.0,
        }
    }
}
