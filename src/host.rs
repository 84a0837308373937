//! Fixed-rate frame loop
//!
//! Hosts feed wall-clock frame times in; the loop turns them into whole ticks
//! of `1 / fps` seconds and keeps a running FPS estimate.

use crate::animation::Animation;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::renderer::Surface;
use crate::settings::Settings;

/// Frames in the FPS averaging window
const FPS_WINDOW: usize = 60;

pub struct FrameLoop<A: Animation> {
    animation: A,
    tick_dt: f32,
    accumulator: f32,
    last_time: Option<f64>,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
    ticks: u64,
}

impl<A: Animation> FrameLoop<A> {
    /// Initialize the animation once and start with an empty accumulator
    pub fn new(settings: &Settings) -> Self {
        Self {
            animation: A::initialize(settings),
            tick_dt: settings.tick_dt(),
            accumulator: 0.0,
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
            ticks: 0,
        }
    }

    /// Run the ticks owed since the previous frame. `time_ms` is a monotonic
    /// timestamp in milliseconds. Returns the number of ticks run.
    pub fn advance(&mut self, time_ms: f64) -> u32 {
        // The first frame runs a single tick
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => self.tick_dt,
        };
        self.last_time = Some(time_ms);
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            self.animation.tick(self.tick_dt);
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= self.tick_dt {
            log::debug!("Dropping {:.3}s of tick backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        self.ticks += substeps as u64;

        self.track_fps(time_ms);
        substeps
    }

    /// Draw the animation's current state
    pub fn render(&self, surface: &mut dyn Surface) {
        self.animation.render(surface);
    }

    fn track_fps(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames_seen = (self.frames_seen + 1).min(FPS_WINDOW);

        if self.frames_seen < 2 {
            return;
        }
        // Oldest sample still in the window
        let oldest_idx = (self.frame_index + FPS_WINDOW - self.frames_seen) % FPS_WINDOW;
        let elapsed = time_ms - self.frame_times[oldest_idx];
        if elapsed > 0.0 {
            let intervals = (self.frames_seen - 1) as f64;
            self.fps = (intervals * 1000.0 / elapsed).round() as u32;
        }
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    /// Measured frames per second over the last `FPS_WINDOW` frames
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Total ticks run
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
