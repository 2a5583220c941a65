//! Camera spin demo application
//!
//! Spins a camera transform about the world or its own up axis inside the
//! engine's frame loop and reports the heading as it turns.
//!
//! Usage: `camera_spin [config.toml|config.ron]`

mod config;

use spin_engine::config::Config;
use spin_engine::foundation::math::{utils, Transform, Vec3};
use spin_engine::rotation::Rotator;
use spin_engine::{AppError, Application, Engine};

use crate::config::SpinAppConfig;

/// Demo application owning the camera transform
struct CameraSpinApp {
    camera: Transform,
    rotator: Rotator,
    report_interval: f32,
    since_report: f32,
}

impl CameraSpinApp {
    fn new(config: &SpinAppConfig) -> Result<Self, AppError> {
        let [x, y, z] = config.camera_position;
        Ok(Self {
            camera: Transform::from_position(Vec3::new(x, y, z)),
            rotator: Rotator::new(config.rotation)?,
            report_interval: config.report_interval,
            since_report: 0.0,
        })
    }

    fn report(&self, engine: &Engine) {
        let forward = self.camera.forward();
        log::info!(
            "frame {:>5} t={:>7.2}s heading={:>8.2}deg up=({:.3}, {:.3}, {:.3})",
            engine.frame_count(),
            engine.total_time(),
            utils::heading_degrees(&forward),
            self.camera.up().x,
            self.camera.up().y,
            self.camera.up().z,
        );
    }
}

impl Application for CameraSpinApp {
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        let config = self.rotator.config();
        log::info!(
            "Camera at {:?}, spinning {} deg/s about {:?}",
            self.camera.position,
            config.rate_per_second,
            config.axis_mode
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        self.rotator.tick(&mut self.camera, delta_time);

        self.since_report += delta_time;
        if self.since_report >= self.report_interval {
            self.since_report -= self.report_interval;
            self.report(engine);
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        self.report(engine);
        log::info!("Final orientation: {:?}", self.camera.rotation);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    spin_engine::foundation::logging::init_with_default(log::LevelFilter::Info);

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            SpinAppConfig::load_from_file(&path)?
        }
        None => {
            log::info!("No configuration given, using defaults");
            SpinAppConfig::default()
        }
    };

    let mut app = CameraSpinApp::new(&config)?;
    Engine::run(config.engine.clone(), &mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spin_engine::rotation::{AxisMode, RotationConfig};
    use spin_engine::EngineConfig;

    #[test]
    fn test_camera_turns_at_configured_rate() {
        let config = SpinAppConfig {
            engine: EngineConfig {
                fixed_delta: Some(0.05),
                max_frames: Some(40),
                target_fps: None,
            },
            rotation: RotationConfig::new(45.0, AxisMode::WorldUp),
            camera_position: [1.0, 2.0, 3.0],
            report_interval: 0.5,
        };
        let mut app = CameraSpinApp::new(&config).unwrap();

        // 40 frames at 50 ms: two seconds, 90 degrees counter-clockwise
        Engine::run(config.engine.clone(), &mut app).unwrap();

        let heading = utils::heading_degrees(&app.camera.forward());
        assert!((heading - 90.0).abs() < 1e-2, "heading = {heading}");
        assert_eq!(app.camera.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rejects_non_finite_rate() {
        let config = SpinAppConfig {
            rotation: RotationConfig::world_up(f32::NAN),
            ..SpinAppConfig::default()
        };
        assert!(matches!(CameraSpinApp::new(&config), Err(AppError::Config(_))));
    }
}
