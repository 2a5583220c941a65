//! # Spin Engine
//!
//! Frame-rate independent orientation updates for objects owned by a host
//! frame loop.
//!
//! ## Features
//!
//! - **Rotator**: Spins an orientation about the world up axis or the
//!   object's own local up axis at a configured rate in degrees per second
//! - **Headless Frame Loop**: A minimal engine that drives applications with
//!   measured or fixed time steps
//! - **Configuration**: TOML and RON configuration files with validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spin_engine::prelude::*;
//!
//! struct Spinner {
//!     camera: Transform,
//!     rotator: Rotator,
//! }
//!
//! impl Application for Spinner {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         self.rotator.tick(&mut self.camera, delta_time);
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rotator = Rotator::new(RotationConfig::new(90.0, AxisMode::WorldUp))?;
//!     let mut app = Spinner { camera: Transform::identity(), rotator };
//!     let config = EngineConfig { max_frames: Some(600), ..EngineConfig::default() };
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod rotation;

mod application;
mod engine;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineConfig, EngineError,
        config::{Config, ConfigError, ConfigFormat},
        foundation::{
            math::{Vec3, Quat, Transform},
            time::Timer,
        },
        rotation::{AxisMode, Orientable, RotationConfig, Rotator},
    };
}
