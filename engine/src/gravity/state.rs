//! Gravity state snapshot

use glam::Vec3;

use super::GravityAxis;

/// Active gravity axis and the vectors derived from it.
///
/// Fields are only reachable through accessors and are recomputed together,
/// so `surface_up` is always the unit vector opposite `gravity_vector`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityState {
    axis: GravityAxis,
    magnitude: f32,
    gravity_vector: Vec3,
    surface_up: Vec3,
}

impl GravityState {
    /// Build the state for `axis` with the given gravity strength (m/s²).
    pub fn new(axis: GravityAxis, magnitude: f32) -> Self {
        let magnitude = magnitude.max(0.0);
        let direction = axis.direction();
        Self {
            axis,
            magnitude,
            gravity_vector: direction * magnitude,
            // Taken from the axis table rather than normalizing the vector so
            // a zero magnitude still has a defined surface.
            surface_up: -direction,
        }
    }

    pub fn axis(&self) -> GravityAxis {
        self.axis
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Gravity acceleration (direction × magnitude).
    pub fn gravity_vector(&self) -> Vec3 {
        self.gravity_vector
    }

    /// Unit direction gravity pulls toward.
    pub fn down(&self) -> Vec3 {
        -self.surface_up
    }

    /// Unit vector opposite gravity; the agent's local vertical.
    pub fn surface_up(&self) -> Vec3 {
        self.surface_up
    }
}

impl Default for GravityState {
    fn default() -> Self {
        Self::new(GravityAxis::Down, 0.0)
    }
}
