//! Camera Configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{ConfigError, check_non_negative};

/// Follow camera tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Offset from the target in the target's local frame (behind and above)
    pub default_offset: Vec3,
    /// Position smoothing rate (1/s)
    pub follow_speed: f32,
    /// Rotation smoothing rate (1/s)
    pub rotate_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_offset: Vec3::new(0.0, 3.0, 10.0),
            follow_speed: 5.0,
            rotate_speed: 5.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_offset.is_finite() {
            return Err(ConfigError::Invalid {
                field: "camera.default_offset",
                value: f32::NAN,
            });
        }
        check_non_negative("camera.follow_speed", self.follow_speed)?;
        check_non_negative("camera.rotate_speed", self.rotate_speed)
    }
}
