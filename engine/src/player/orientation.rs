//! Body orientation
//!
//! Tilts the body so its local up follows the active surface-up. The turn is
//! rate limited and runs on the variable tick, so the visual tilt never snaps
//! and does not depend on the physics step length.

use glam::{Quat, Vec3};

use crate::physics::PhysicsBody;
use crate::physics::types::{LOCAL_UP, rotate_towards};

/// Rotation that carries the body's current up onto `surface_up` by the
/// shortest arc, composed with the current rotation.
pub fn surface_alignment_target(rotation: Quat, surface_up: Vec3) -> Quat {
    let up = (rotation * LOCAL_UP).normalize();
    (Quat::from_rotation_arc(up, surface_up) * rotation).normalize()
}

/// Rate-limited alignment of body up to surface-up.
#[derive(Debug, Clone, Copy)]
pub struct BodyOrientation {
    /// Degrees per second
    rotation_speed: f32,
}

impl BodyOrientation {
    pub fn new(rotation_speed_degrees: f32) -> Self {
        Self {
            rotation_speed: rotation_speed_degrees.max(0.0),
        }
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Rotate `body` toward alignment with `surface_up` by at most
    /// `rotation_speed * dt` degrees. Returns `true` once aligned.
    pub fn update<B: PhysicsBody + ?Sized>(&self, body: &mut B, surface_up: Vec3, dt: f32) -> bool {
        let current = body.rotation();
        let target = surface_alignment_target(current, surface_up);
        let max_step = (self.rotation_speed * dt.max(0.0)).to_radians();

        let next = rotate_towards(current, target, max_step);
        body.set_rotation(next);

        (next * LOCAL_UP).dot(surface_up) > 0.9999
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::SandboxBody;

    #[test]
    fn test_target_aligns_up() {
        let target = surface_alignment_target(Quat::IDENTITY, Vec3::X);
        assert!((target * LOCAL_UP - Vec3::X).length() < 0.001);
    }

    #[test]
    fn test_rotation_is_rate_limited() {
        let mut body = SandboxBody::unit_cube(Vec3::ZERO);
        let orientation = BodyOrientation::new(540.0);

        // 90° turn at 540°/s takes more than one 0.1s tick (54°)
        let aligned = orientation.update(&mut body, Vec3::X, 0.1);
        assert!(!aligned);
        let angle = body.up().angle_between(Vec3::Y).to_degrees();
        assert!((angle - 54.0).abs() < 0.1);

        assert!(orientation.update(&mut body, Vec3::X, 0.1));
        assert!((body.up() - Vec3::X).length() < 0.001);
    }

    #[test]
    fn test_flip_to_ceiling() {
        let mut body = SandboxBody::unit_cube(Vec3::ZERO);
        let orientation = BodyOrientation::new(540.0);

        for _ in 0..10 {
            orientation.update(&mut body, Vec3::NEG_Y, 0.05);
        }
        assert!((body.up() - Vec3::NEG_Y).length() < 0.001);
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut body = SandboxBody::unit_cube(Vec3::ZERO);
        let orientation = BodyOrientation::new(540.0);
        orientation.update(&mut body, Vec3::X, 0.0);
        assert!((body.up() - Vec3::Y).length() < 0.001);
    }
}
