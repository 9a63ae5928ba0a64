//! Config Module
//!
//! Centralized configuration for the gravity cube: locomotion tuning, ground
//! probing, feedback palette, camera and animation timing, and the fixed-step
//! clock. Every section has a `Default` matching the shipped tuning and is
//! loadable from JSON with missing fields falling back to defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use gravity_cube_engine::config::GravityCubeConfig;
//!
//! let config = GravityCubeConfig::load("config/gravity_cube.json")?;
//! println!("ground speed: {}", config.locomotion.max_speed_ground);
//! ```

pub mod camera_config;
pub mod player_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use crate::feedback::FeedbackPalette;
use crate::physics::LayerMask;
pub use camera_config::CameraConfig;
pub use player_config::{AnimationConfig, LocomotionParams};

/// Errors raised while loading, saving or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter is negative or not finite
    #[error("invalid value {value} for {field}")]
    Invalid { field: &'static str, value: f32 },
}

pub(crate) fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, value })
    }
}

/// Fixed-step clock settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Physics step length in seconds
    pub fixed_timestep: f32,
    /// Upper bound on physics steps run for a single frame
    pub max_fixed_steps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 0.02,
            max_fixed_steps: 8,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return Err(ConfigError::Invalid {
                field: "simulation.fixed_timestep",
                value: self.fixed_timestep,
            });
        }
        if self.max_fixed_steps == 0 {
            return Err(ConfigError::Invalid {
                field: "simulation.max_fixed_steps",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Root configuration for one gravity cube agent and its presentation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityCubeConfig {
    pub locomotion: LocomotionParams,
    /// Layers the ground probe treats as walkable
    pub ground_mask: LayerMask,
    pub feedback: FeedbackPalette,
    pub camera: CameraConfig,
    pub animation: AnimationConfig,
    pub simulation: SimulationConfig,
}

impl GravityCubeConfig {
    /// Read and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Check every section for negative or non-finite values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locomotion.validate()?;
        self.camera.validate()?;
        self.animation.validate()?;
        self.simulation.validate()?;
        check_non_negative("feedback.sfx_volume", self.feedback.sfx_volume)?;
        check_non_negative("feedback.vfx_surface_offset", self.feedback.vfx_surface_offset)?;
        check_non_negative("feedback.fallback_extent_scale", self.feedback.fallback_extent_scale)
    }
}
