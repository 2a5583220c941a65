//! Math utilities and types
//!
//! Provides the math types used for orientation updates. All coordinates
//! follow Y-up right-handed conventions.

pub use nalgebra::{
    Vector3,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// World space up direction (Y-up)
pub fn world_up() -> Unit<Vec3> {
    Vec3::y_axis()
}

/// Transform representing position, rotation, and scale
///
/// The host owns this state; rotation code only ever writes `rotation`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Local up direction expressed in world space
    pub fn up(&self) -> Unit<Vec3> {
        self.rotation * world_up()
    }

    /// Local forward direction (-Z) expressed in world space
    pub fn forward(&self) -> Unit<Vec3> {
        self.rotation * -Vec3::z_axis()
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Heading of a direction around the world up axis, in degrees within (-180, 180]
    ///
    /// Measured counter-clockwise from -Z when viewed from above.
    pub fn heading_degrees(direction: &Vec3) -> f32 {
        rad_to_deg((-direction.x).atan2(-direction.z))
    }
}
