//! Time management utilities

use std::time::{Duration, Instant};

/// High-precision timer for frame timing
///
/// Either measures wall-clock time between [`Timer::update`] calls or is
/// stepped by an explicit delta through [`Timer::advance`].
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer from the wall clock (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed.as_secs_f32());
    }

    /// Step the timer by a fixed delta in seconds
    ///
    /// Negative and non-finite deltas are recorded as zero.
    pub fn advance(&mut self, delta_time: f32) {
        self.last_frame = Instant::now();
        let delta_time = if delta_time.is_finite() { delta_time.max(0.0) } else { 0.0 };
        self.record(delta_time);
    }

    fn record(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
        self.total_time += delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Wall-clock time since the current frame started
    pub fn frame_elapsed(&self) -> Duration {
        self.last_frame.elapsed()
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}
