//! Camera spin demo configuration

use serde::{Deserialize, Serialize};
use spin_engine::config::{Config, ConfigError};
use spin_engine::rotation::RotationConfig;
use spin_engine::EngineConfig;

/// Top-level configuration file for the demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinAppConfig {
    /// Frame loop settings
    pub engine: EngineConfig,

    /// Camera rotation settings
    pub rotation: RotationConfig,

    /// Camera starting position
    pub camera_position: [f32; 3],

    /// Seconds of simulated time between heading reports
    pub report_interval: f32,
}

impl Default for SpinAppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                fixed_delta: None,
                max_frames: Some(600),
                target_fps: Some(60.0),
            },
            rotation: RotationConfig::world_up(30.0),
            camera_position: [0.0, 2.0, 8.0],
            report_interval: 1.0,
        }
    }
}

impl Config for SpinAppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.rotation.validate()?;
        if !self.report_interval.is_finite() || self.report_interval <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "report_interval",
                reason: format!("must be a finite, positive number of seconds, got {}", self.report_interval),
            });
        }
        Ok(())
    }
}
