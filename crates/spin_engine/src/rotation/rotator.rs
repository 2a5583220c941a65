//! Frame-tick rotator

use crate::config::{Config, ConfigError};
use crate::foundation::math::{utils, world_up, Quat, Unit, Vec3};

use super::{AxisMode, Orientable, RotationConfig};

/// Spins an orientation at a fixed rate about a world or local up axis
///
/// Stateless between ticks apart from the orientation it is handed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotator {
    config: RotationConfig,
}

impl Rotator {
    /// Create a rotator, rejecting a non-finite rate
    pub fn new(config: RotationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "Rotator created: {} deg/s about {:?}",
            config.rate_per_second,
            config.axis_mode
        );
        Ok(Self { config })
    }

    /// The configuration this rotator was built with
    pub const fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Advance `object` by `elapsed_seconds` of rotation
    pub fn tick<O: Orientable + ?Sized>(&self, object: &mut O, elapsed_seconds: f32) {
        let orientation = self.rotate(object.orientation(), elapsed_seconds);
        object.set_orientation(orientation);
    }

    /// Orientation after `elapsed_seconds` of rotation from `orientation`
    ///
    /// World rotations pre-multiply and local rotations post-multiply. A zero
    /// angle still composes with the identity so both modes share one path.
    pub fn rotate(&self, orientation: Quat, elapsed_seconds: f32) -> Quat {
        let angle = utils::deg_to_rad(self.angle_for(elapsed_seconds));
        let step = Quat::from_axis_angle(&world_up(), angle);

        let mut rotated = match self.config.axis_mode {
            AxisMode::WorldUp => step * orientation,
            // Local +Y in the object's frame is its current up vector in world space
            AxisMode::LocalUp => orientation * step,
        };
        rotated.renormalize();

        log::trace!("Rotated {:.4} rad about {:?}", angle, self.config.axis_mode);
        rotated
    }

    /// Incremental angle in degrees for one tick
    ///
    /// Negative elapsed time counts as zero. A non-finite product is clamped
    /// to zero so a bad frame time can't poison the orientation.
    pub fn angle_for(&self, elapsed_seconds: f32) -> f32 {
        let elapsed = if elapsed_seconds > 0.0 { elapsed_seconds } else { 0.0 };
        let angle = self.config.rate_per_second * elapsed;

        if angle.is_finite() {
            angle
        } else {
            log::warn!(
                "Non-finite rotation angle (rate {} deg/s, elapsed {} s), skipping rotation",
                self.config.rate_per_second,
                elapsed_seconds
            );
            0.0
        }
    }

    /// World space axis the next tick would turn `orientation` about
    pub fn axis(&self, orientation: &Quat) -> Unit<Vec3> {
        match self.config.axis_mode {
            AxisMode::WorldUp => world_up(),
            AxisMode::LocalUp => *orientation * world_up(),
        }
    }
}
