//! Core engine implementation
//!
//! A headless host frame loop: it owns the frame clock and hands each frame's
//! delta time to an [`Application`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    application::Application,
    config::{Config, ConfigError},
    foundation::time::Timer,
};

/// Main engine struct
///
/// The engine coordinates the frame clock and manages the main loop.
pub struct Engine {
    /// Frame timing
    timer: Timer,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!("Initializing engine...");

        Ok(Self {
            timer: Timer::new(),
            config,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    ///
    /// Stops when the application calls [`Engine::quit`] or the configured
    /// frame limit is reached. `cleanup` runs whenever `initialize` succeeded.
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::InitializationFailed(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");
        let result = engine.main_loop(app);

        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} frames ({:.2}s simulated)",
            engine.frame_count(),
            engine.total_time()
        );
        result
    }

    fn main_loop<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        while self.running && !self.frame_limit_reached() {
            match self.config.fixed_delta {
                Some(delta) => self.timer.advance(delta),
                None => self.timer.update(),
            }
            let delta_time = self.timer.delta_time();

            app.update(self, delta_time)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;

            self.pace_frame();
        }
        Ok(())
    }

    fn frame_limit_reached(&self) -> bool {
        self.config
            .max_frames
            .is_some_and(|max| self.timer.frame_count() >= max)
    }

    fn pace_frame(&self) {
        let Some(period) = self.config.target_fps.and_then(frame_period) else {
            return;
        };
        let remaining = remaining_frame_time(period, self.timer.frame_elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }

    /// Request engine shutdown after the current frame
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop will run another frame
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Total time fed to the application so far
    pub fn total_time(&self) -> f32 {
        self.timer.total_time()
    }

    /// Number of frames started so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Engine configuration
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Target duration of one frame at `fps`, if it fits in a [`Duration`]
fn frame_period(fps: f32) -> Option<Duration> {
    Duration::try_from_secs_f32(1.0 / fps).ok()
}

/// Sleep needed to stretch a frame that already took `spent` out to `period`
fn remaining_frame_time(period: Duration, spent: Duration) -> Duration {
    period.saturating_sub(spent)
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Constant delta per frame in seconds; measured from the wall clock when unset
    pub fixed_delta: Option<f32>,

    /// Stop after this many frames; unbounded when unset
    pub max_frames: Option<u64>,

    /// Sleep off whatever is left of each frame's `1 / target_fps` period
    pub target_fps: Option<f32>,
}

impl Config for EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(delta) = self.fixed_delta {
            if !delta.is_finite() || delta < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "fixed_delta",
                    reason: format!("must be a finite, non-negative number of seconds, got {delta}"),
                });
            }
        }
        if let Some(fps) = self.target_fps {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "target_fps",
                    reason: format!("must be a finite, positive rate, got {fps}"),
                });
            }
            if frame_period(fps).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "target_fps",
                    reason: format!("frame period of {fps} fps is too long to represent"),
                });
            }
        }
        Ok(())
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Application failed to initialize
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Invalid engine configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::foundation::math::{constants::PI, Quat, Transform, Vec3};
    use crate::rotation::{RotationConfig, Rotator};
    use approx::assert_relative_eq;

    struct Recorder {
        deltas: Vec<f32>,
        fail_init: bool,
        quit_after: Option<usize>,
        fail_on: Option<usize>,
        initialized: bool,
        cleaned_up: bool,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                deltas: Vec::new(),
                fail_init: false,
                quit_after: None,
                fail_on: None,
                initialized: false,
                cleaned_up: false,
            }
        }
    }

    impl Application for Recorder {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            if self.fail_init {
                return Err(AppError::Custom("no camera".to_string()));
            }
            self.initialized = true;
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
            self.deltas.push(delta_time);
            if self.fail_on == Some(self.deltas.len()) {
                return Err(AppError::Custom("boom".to_string()));
            }
            if self.quit_after == Some(self.deltas.len()) {
                engine.quit();
            }
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    fn fixed(delta: f32, frames: u64) -> EngineConfig {
        EngineConfig {
            fixed_delta: Some(delta),
            max_frames: Some(frames),
            target_fps: None,
        }
    }

    #[test]
    fn test_runs_until_frame_limit() {
        let mut app = Recorder::new();
        Engine::run(fixed(0.5, 6), &mut app).unwrap();

        assert!(app.initialized);
        assert!(app.cleaned_up);
        assert_eq!(app.deltas, vec![0.5; 6]);
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = Recorder::new();
        app.quit_after = Some(3);
        Engine::run(fixed(0.1, 100), &mut app).unwrap();

        assert_eq!(app.deltas.len(), 3);
        assert!(app.cleaned_up);
    }

    #[test]
    fn test_update_error_still_cleans_up() {
        let mut app = Recorder::new();
        app.fail_on = Some(2);
        let result = Engine::run(fixed(0.1, 10), &mut app);

        assert!(matches!(result, Err(EngineError::ApplicationError(_))));
        assert_eq!(app.deltas.len(), 2);
        assert!(app.cleaned_up);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut app = Recorder::new();
        let result = Engine::run(fixed(-1.0, 1), &mut app);

        assert!(matches!(result, Err(EngineError::Config(_))));
        assert!(!app.initialized);

        let bad_fps = EngineConfig { target_fps: Some(0.0), ..EngineConfig::default() };
        assert!(bad_fps.validate().is_err());
    }

    #[test]
    fn test_unrepresentable_frame_period_rejected() {
        for fps in [1e-39, 1e-20] {
            let config = EngineConfig {
                fixed_delta: Some(0.01),
                max_frames: Some(1),
                target_fps: Some(fps),
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidValue { field: "target_fps", .. })
            ));

            let mut app = Recorder::new();
            let result = Engine::run(config, &mut app);
            assert!(matches!(result, Err(EngineError::Config(_))));
            assert!(app.deltas.is_empty());
        }

        // Slow but representable rates are still accepted
        let slow = EngineConfig { target_fps: Some(0.001), ..EngineConfig::default() };
        assert!(slow.validate().is_ok());
    }

    #[test]
    fn test_initialize_error_skips_loop_and_cleanup() {
        let mut app = Recorder::new();
        app.fail_init = true;
        let result = Engine::run(fixed(0.1, 10), &mut app);

        match result {
            Err(EngineError::InitializationFailed(msg)) => assert!(msg.contains("no camera")),
            other => panic!("expected InitializationFailed, got {other:?}"),
        }
        assert!(app.deltas.is_empty());
        assert!(!app.cleaned_up);
    }

    #[test]
    fn test_frame_pacing_subtracts_work_time() {
        // 1 / 32 is exact in binary, so the period is exactly 31.25 ms
        let period = frame_period(32.0).unwrap();
        assert_eq!(period, Duration::from_micros(31_250));

        assert_eq!(remaining_frame_time(period, Duration::from_micros(1_250)), Duration::from_millis(30));
        assert_eq!(remaining_frame_time(period, period), Duration::ZERO);
        // An overrunning frame gets no extra sleep
        assert_eq!(remaining_frame_time(period, Duration::from_millis(50)), Duration::ZERO);
    }

    #[test]
    fn test_paced_loop_holds_target_rate() {
        struct SlowFrames(usize);

        impl Application for SlowFrames {
            fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
                Ok(())
            }

            fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
                self.0 += 1;
                std::thread::sleep(Duration::from_millis(20));
                Ok(())
            }

            fn cleanup(&mut self, _engine: &mut Engine) {}
        }

        let config = EngineConfig {
            fixed_delta: Some(0.04),
            max_frames: Some(5),
            target_fps: Some(25.0),
        };
        let mut app = SlowFrames(0);
        let started = std::time::Instant::now();
        Engine::run(config, &mut app).unwrap();
        let elapsed = started.elapsed();

        // 5 frames at 40 ms each; sleeping a full period on top of 20 ms of work would take 300 ms
        assert_eq!(app.0, 5);
        assert!(elapsed >= Duration::from_millis(190), "elapsed = {elapsed:?}");
        assert!(elapsed < Duration::from_millis(280), "elapsed = {elapsed:?}");
    }

    #[test]
    fn test_engine_config_parses_toml() {
        let config = EngineConfig::from_str_with_format(
            "fixed_delta = 0.02\nmax_frames = 50",
            crate::config::ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config, fixed(0.02, 50));
    }

    struct Spinner {
        camera: Transform,
        rotator: Rotator,
    }

    impl Application for Spinner {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Ok(())
        }

        fn update(&mut self, _engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
            self.rotator.tick(&mut self.camera, delta_time);
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {}
    }

    #[test]
    fn test_frame_loop_drives_rotator() {
        let mut app = Spinner {
            camera: Transform::from_position(Vec3::new(0.0, 5.0, 10.0)),
            rotator: Rotator::new(RotationConfig::world_up(90.0)).unwrap(),
        };

        // 60 frames at 1/60 s: one second of rotation
        Engine::run(fixed(1.0 / 60.0, 60), &mut app).unwrap();

        let expected = Quat::from_axis_angle(&Vec3::y_axis(), PI / 2.0);
        let dot = app.camera.rotation.coords.dot(&expected.coords);
        assert!(dot.abs() > 0.999_99, "Quaternion rotation mismatch: dot product = {}", dot);
        assert_relative_eq!(app.camera.position, Vec3::new(0.0, 5.0, 10.0));
    }
}
