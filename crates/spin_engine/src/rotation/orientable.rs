//! Access to an orientation owned by someone else

use crate::foundation::math::{Quat, Transform};

/// Anything whose orientation a [`Rotator`](super::Rotator) may read and replace
pub trait Orientable {
    /// Current orientation
    fn orientation(&self) -> Quat;

    /// Replace the orientation, leaving every other property untouched
    fn set_orientation(&mut self, orientation: Quat);
}

impl Orientable for Transform {
    fn orientation(&self) -> Quat {
        self.rotation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.rotation = orientation;
    }
}

impl Orientable for Quat {
    fn orientation(&self) -> Quat {
        *self
    }

    fn set_orientation(&mut self, orientation: Quat) {
        *self = orientation;
    }
}
