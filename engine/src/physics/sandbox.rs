//! Sandbox rigid body
//!
//! A box-shaped body moving through static AABB colliders. Good enough to
//! exercise the controller end to end without a full physics engine.
//!
//! - Semi-implicit Euler: queued accelerations change velocity, then velocity
//!   moves the body.
//! - Collisions push the body out along the axis of least penetration and
//!   cancel the velocity component driving it into the surface.
//! - The box stays axis aligned for collision purposes; rotation is visual.

use glam::{Quat, Vec3};

use super::collision::{Aabb, StaticCollider, ray_cast_colliders};
use super::{ForceMode, LayerMask, PhysicsBody, PhysicsStep, RayHit};

/// Box body integrated by [`PhysicsStep::step`].
#[derive(Debug, Clone)]
pub struct SandboxBody {
    position: Vec3,
    rotation: Quat,
    velocity: Vec3,
    half_extents: Vec3,
    /// Accelerations queued since the last step
    pending_acceleration: Vec3,
    colliders: Vec<StaticCollider>,
}

impl SandboxBody {
    /// Create a body centered at `position`.
    pub fn new(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            half_extents: half_extents.abs(),
            pending_acceleration: Vec3::ZERO,
            colliders: Vec::new(),
        }
    }

    /// Unit cube (half extents 0.5) at `position`.
    pub fn unit_cube(position: Vec3) -> Self {
        Self::new(position, Vec3::splat(0.5))
    }

    /// Builder-style collider registration.
    pub fn with_collider(mut self, collider: StaticCollider) -> Self {
        self.colliders.push(collider);
        self
    }

    pub fn add_collider(&mut self, collider: StaticCollider) {
        self.colliders.push(collider);
    }

    pub fn colliders(&self) -> &[StaticCollider] {
        &self.colliders
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Accelerations queued for the next step.
    pub fn pending_acceleration(&self) -> Vec3 {
        self.pending_acceleration
    }

    /// World-space bounds of the body.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, self.half_extents)
    }

    fn resolve_collisions(&mut self) {
        for collider in &self.colliders {
            let bounds = Aabb::from_center(self.position, self.half_extents);
            let Some(depth) = bounds.overlap(&collider.bounds) else {
                continue;
            };

            // Push out along the shallowest axis
            let axis = if depth.x <= depth.y && depth.x <= depth.z {
                Vec3::X
            } else if depth.y <= depth.z {
                Vec3::Y
            } else {
                Vec3::Z
            };
            let side = (self.position - collider.bounds.center()).dot(axis).signum();
            let normal = axis * side;

            self.position += normal * depth.dot(axis);

            let into_surface = self.velocity.dot(normal);
            if into_surface < 0.0 {
                self.velocity -= normal * into_surface;
            }
        }
    }
}

impl PhysicsBody for SandboxBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    fn linear_velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        match mode {
            ForceMode::Acceleration => self.pending_acceleration += force,
            ForceMode::VelocityChange => self.velocity += force,
        }
    }

    fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        ray_cast_colliders(&self.colliders, origin, direction, max_distance, mask)
    }
}

impl PhysicsStep for SandboxBody {
    fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.velocity += self.pending_acceleration * dt;
        self.pending_acceleration = Vec3::ZERO;
        self.position += self.velocity * dt;
        self.resolve_collisions();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> StaticCollider {
        StaticCollider::new(
            Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0)),
            LayerMask::GROUND,
        )
    }

    #[test]
    fn test_velocity_change_is_immediate() {
        let mut body = SandboxBody::unit_cube(Vec3::ZERO);
        body.add_force(Vec3::new(0.0, 6.0, 0.0), ForceMode::VelocityChange);
        assert_eq!(body.linear_velocity(), Vec3::new(0.0, 6.0, 0.0));
    }

    #[test]
    fn test_acceleration_waits_for_step() {
        let mut body = SandboxBody::unit_cube(Vec3::new(0.0, 5.0, 0.0));
        body.add_force(Vec3::new(0.0, -25.0, 0.0), ForceMode::Acceleration);
        assert_eq!(body.linear_velocity(), Vec3::ZERO);

        body.step(0.02);
        assert!((body.linear_velocity().y + 0.5).abs() < 1e-5);
        assert_eq!(body.pending_acceleration(), Vec3::ZERO);
    }

    #[test]
    fn test_resting_on_floor() {
        let mut body = SandboxBody::unit_cube(Vec3::new(0.0, 0.5, 0.0)).with_collider(floor());
        for _ in 0..50 {
            body.add_force(Vec3::new(0.0, -25.0, 0.0), ForceMode::Acceleration);
            body.step(0.02);
        }
        assert!((body.position().y - 0.5).abs() < 1e-4);
        assert!(body.linear_velocity().y.abs() < 1e-4);
    }

    #[test]
    fn test_raycast_uses_colliders() {
        let body = SandboxBody::unit_cube(Vec3::new(0.0, 0.5, 0.0)).with_collider(floor());
        let hit = body.raycast(body.position(), Vec3::NEG_Y, 0.55, LayerMask::all());
        assert!(hit.is_some());
    }
}
