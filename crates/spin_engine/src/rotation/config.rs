//! Rotation configuration

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};

/// Which up axis a rotation turns about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    /// Fixed world space up (+Y), applied in world space
    #[default]
    WorldUp,
    /// The object's current local up, applied in the object's local frame
    LocalUp,
}

/// Rate and axis for a [`Rotator`](super::Rotator)
///
/// Set once at construction; the rotator never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Degrees per second; negative values spin the other way
    #[serde(alias = "rotate_speed")]
    pub rate_per_second: f32,

    /// Axis selection
    pub axis_mode: AxisMode,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            rate_per_second: 0.0,
            axis_mode: AxisMode::WorldUp,
        }
    }
}

impl RotationConfig {
    /// Create a rotation configuration
    pub const fn new(rate_per_second: f32, axis_mode: AxisMode) -> Self {
        Self { rate_per_second, axis_mode }
    }

    /// Spin about the world up axis
    pub const fn world_up(rate_per_second: f32) -> Self {
        Self::new(rate_per_second, AxisMode::WorldUp)
    }

    /// Spin about the object's local up axis
    pub const fn local_up(rate_per_second: f32) -> Self {
        Self::new(rate_per_second, AxisMode::LocalUp)
    }
}

impl Config for RotationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.rate_per_second.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "rate_per_second",
                reason: format!("must be finite, got {}", self.rate_per_second),
            });
        }
        Ok(())
    }
}
