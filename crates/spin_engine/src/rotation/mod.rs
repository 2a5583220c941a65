//! Continuous rotation of host-owned orientations
//!
//! A [`Rotator`] turns an object about either the fixed world up axis or the
//! object's own local up axis. The host calls [`Rotator::tick`] once per frame
//! with the elapsed time; the rotator keeps no state between calls.

pub mod config;
pub mod orientable;
pub mod rotator;

pub use config::{AxisMode, RotationConfig};
pub use orientable::Orientable;
pub use rotator::Rotator;
