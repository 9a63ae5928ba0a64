//! Physics collaborator module
//!
//! The gravity controller never integrates motion itself. It talks to a rigid
//! body through the [`PhysicsBody`] trait: read and write linear velocity,
//! queue forces, and cast rays into the scene. Any engine can sit behind it.
//!
//! # Force modes
//!
//! - [`ForceMode::Acceleration`] accumulates until the next physics step and is
//!   mass independent.
//! - [`ForceMode::VelocityChange`] is an instantaneous impulse, visible through
//!   [`PhysicsBody::linear_velocity`] immediately.
//!
//! # Submodules
//!
//! - [`types`] - glam re-exports and vector/rotation helpers
//! - [`collision`] - Ray-AABB intersection and static colliders
//! - [`sandbox`] - Minimal box body used by the sandbox binary and tests

pub mod collision;
pub mod sandbox;
pub mod types;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

pub use collision::{
    Aabb, StaticCollider, aabb_surface_normal, ray_aabb_intersect, ray_cast_colliders,
};
pub use sandbox::SandboxBody;
pub use types::{
    LOCAL_FORWARD, LOCAL_RIGHT, LOCAL_UP, Quat, Vec2, Vec3, look_rotation, project_on_plane,
    rotate_towards, smoothing_factor,
};

bitflags! {
    /// Collision layers a ray cast may hit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct LayerMask: u32 {
        /// Untagged geometry
        const DEFAULT = 1 << 0;
        /// Walkable surfaces
        const GROUND = 1 << 1;
        /// Player bodies
        const PLAYER = 1 << 2;
        /// Trigger volumes
        const TRIGGER = 1 << 3;
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::all()
    }
}

/// How a force passed to [`PhysicsBody::add_force`] is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Continuous acceleration (m/s²), integrated over the next step.
    Acceleration,
    /// Instant change of velocity (m/s).
    VelocityChange,
}

/// Result of a successful ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space hit point
    pub point: Vec3,
    /// Surface normal of the collider at the hit point
    pub normal: Vec3,
    /// Distance from the ray origin
    pub distance: f32,
}

/// Rigid body the controller drives.
///
/// Implementations must not apply their own gravity; the controller adds it
/// every fixed tick along the active gravity axis.
pub trait PhysicsBody {
    /// Body reference point (center) in world space.
    fn position(&self) -> Vec3;

    /// Body orientation.
    fn rotation(&self) -> Quat;

    /// Overwrite the body orientation.
    fn set_rotation(&mut self, rotation: Quat);

    /// Current linear velocity, including impulses applied this tick.
    fn linear_velocity(&self) -> Vec3;

    /// Overwrite the linear velocity.
    fn set_linear_velocity(&mut self, velocity: Vec3);

    /// Queue a force on the body.
    fn add_force(&mut self, force: Vec3, mode: ForceMode);

    /// Half extents of the body's bounding box.
    fn half_extents(&self) -> Vec3;

    /// Cast a single bounded ray against colliders on `mask`.
    ///
    /// `direction` must be unit length.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask)
    -> Option<RayHit>;

    /// Local forward axis in world space.
    fn forward(&self) -> Vec3 {
        self.rotation() * LOCAL_FORWARD
    }

    /// Local right axis in world space.
    fn right(&self) -> Vec3 {
        self.rotation() * LOCAL_RIGHT
    }

    /// Local up axis in world space.
    fn up(&self) -> Vec3 {
        self.rotation() * LOCAL_UP
    }
}

/// Integrator hook: advance the body by one fixed step.
pub trait PhysicsStep {
    fn step(&mut self, dt: f32);
}
