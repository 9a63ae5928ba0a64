//! Player Configuration
//!
//! Locomotion tuning and animation timing for the gravity cube.

use serde::{Deserialize, Serialize};

use super::{ConfigError, check_non_negative};

/// Immutable per-agent locomotion tuning. All values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionParams {
    /// Lateral speed cap while grounded (m/s)
    pub max_speed_ground: f32,
    /// Lateral speed cap while airborne (m/s)
    pub max_speed_air: f32,
    /// Acceleration cap while grounded (m/s²)
    pub accel_ground: f32,
    /// Acceleration cap while airborne (m/s²)
    pub accel_air: f32,
    /// Gravity strength (m/s²)
    pub gravity_magnitude: f32,
    /// Push-off velocity change along local up (m/s)
    pub push_impulse: f32,
    /// Body tilt speed toward surface-up (degrees/s)
    pub rotation_speed: f32,
    /// Ground ray length from the body center (half height + margin)
    pub ground_probe_distance: f32,
}

impl Default for LocomotionParams {
    fn default() -> Self {
        Self {
            max_speed_ground: 8.0,
            max_speed_air: 8.0,
            accel_ground: 40.0,
            accel_air: 8.0,
            gravity_magnitude: 25.0,
            push_impulse: 6.0,
            rotation_speed: 540.0,
            ground_probe_distance: 0.55,
        }
    }
}

impl LocomotionParams {
    /// Lateral speed cap for the given ground state.
    #[inline]
    pub fn max_speed(&self, grounded: bool) -> f32 {
        if grounded {
            self.max_speed_ground
        } else {
            self.max_speed_air
        }
    }

    /// Acceleration cap for the given ground state.
    #[inline]
    pub fn accel(&self, grounded: bool) -> f32 {
        if grounded {
            self.accel_ground
        } else {
            self.accel_air
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("locomotion.max_speed_ground", self.max_speed_ground)?;
        check_non_negative("locomotion.max_speed_air", self.max_speed_air)?;
        check_non_negative("locomotion.accel_ground", self.accel_ground)?;
        check_non_negative("locomotion.accel_air", self.accel_air)?;
        check_non_negative("locomotion.gravity_magnitude", self.gravity_magnitude)?;
        check_non_negative("locomotion.push_impulse", self.push_impulse)?;
        check_non_negative("locomotion.rotation_speed", self.rotation_speed)?;
        check_non_negative("locomotion.ground_probe_distance", self.ground_probe_distance)
    }
}

/// Timing and smoothing for the animation driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds of falling before a fall counts as long
    pub short_fall_threshold: f32,
    /// Seconds the land animation blocks exit
    pub land_animation_duration: f32,
    /// Ray length used to sample the true surface normal while grounded
    pub surface_probe_distance: f32,
    /// Model facing slerp rate (1/s)
    pub facing_speed: f32,
    /// Move axis magnitude below which facing is left alone
    pub facing_dead_zone: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            short_fall_threshold: 0.5,
            land_animation_duration: 0.3,
            surface_probe_distance: 1.5,
            facing_speed: 10.0,
            facing_dead_zone: 0.1,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("animation.short_fall_threshold", self.short_fall_threshold)?;
        check_non_negative("animation.land_animation_duration", self.land_animation_duration)?;
        check_non_negative("animation.surface_probe_distance", self.surface_probe_distance)?;
        check_non_negative("animation.facing_speed", self.facing_speed)?;
        check_non_negative("animation.facing_dead_zone", self.facing_dead_zone)
    }
}
