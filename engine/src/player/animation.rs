//! Animation driver
//!
//! Feeds an [`Animator`] from the body's motion and ground state each frame:
//! surface-relative vertical velocity and speed, grounded and long-fall flags,
//! and one-shot jump/land triggers. Also turns the visual model to face the
//! movement input.
//!
//! The driver skips the whole frame when either the animator or the body is
//! missing.

use glam::{Quat, Vec2, Vec3};

use super::ground_probe::GroundState;
use crate::config::AnimationConfig;
use crate::physics::{LayerMask, PhysicsBody};

/// Animator parameter names.
pub mod params {
    pub const VERTICAL_VELOCITY: &str = "VerticalVelocity";
    pub const SPEED: &str = "Speed";
    pub const IS_GROUNDED: &str = "IsGrounded";
    pub const IS_IN_LONG_FALL: &str = "IsInLongFall";
    pub const JUMP: &str = "Jump";
    pub const LAND: &str = "Land";
}

/// Parameter sink of an animation state machine.
pub trait Animator {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_trigger(&mut self, name: &str);
}

impl<T: Animator + ?Sized> Animator for Box<T> {
    fn set_float(&mut self, name: &str, value: f32) {
        (**self).set_float(name, value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        (**self).set_bool(name, value);
    }

    fn set_trigger(&mut self, name: &str) {
        (**self).set_trigger(name);
    }
}

/// Logs triggers; parameter writes are traced.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnimator;

impl Animator for LogAnimator {
    fn set_float(&mut self, name: &str, value: f32) {
        log::trace!("[Animator] {name} = {value:.3}");
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        log::trace!("[Animator] {name} = {value}");
    }

    fn set_trigger(&mut self, name: &str) {
        log::info!("[Animator] trigger {name}");
    }
}

/// Keeps the latest parameter values and every trigger in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnimator {
    pub floats: Vec<(String, f32)>,
    pub bools: Vec<(String, bool)>,
    pub triggers: Vec<String>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written to a float parameter.
    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.floats.iter().rev().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// Latest value written to a bool parameter.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.bools.iter().rev().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn trigger_count(&self, name: &str) -> usize {
        self.triggers.iter().filter(|t| *t == name).count()
    }
}

impl Animator for RecordingAnimator {
    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.push((name.to_owned(), value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.push((name.to_owned(), value));
    }

    fn set_trigger(&mut self, name: &str) {
        self.triggers.push(name.to_owned());
    }
}

/// Model yaw that faces the local input direction (x = right, y = forward).
pub fn facing_rotation(move_axes: Vec2) -> Quat {
    // Local forward is -Z, so input (x, y) maps to local (x, 0, -y)
    Quat::from_rotation_y((-move_axes.x).atan2(move_axes.y))
}

/// Per-frame animator feed for one agent.
#[derive(Debug, Clone)]
pub struct AnimationDriver<A: Animator> {
    animator: Option<A>,
    config: AnimationConfig,
    surface_mask: LayerMask,
    /// Seconds since the driver started
    clock: f32,
    was_grounded: bool,
    fall_start_time: f32,
    last_land_time: Option<f32>,
    is_in_long_fall: bool,
    surface_normal: Vec3,
    model_rotation: Quat,
}

impl<A: Animator> AnimationDriver<A> {
    /// Create a driver without an animator attached.
    pub fn new(config: AnimationConfig, surface_mask: LayerMask) -> Self {
        Self {
            animator: None,
            config,
            surface_mask,
            clock: 0.0,
            was_grounded: false,
            fall_start_time: 0.0,
            last_land_time: None,
            is_in_long_fall: false,
            surface_normal: Vec3::Y,
            model_rotation: Quat::IDENTITY,
        }
    }

    pub fn with_animator(mut self, animator: A) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn set_animator(&mut self, animator: Option<A>) {
        self.animator = animator;
    }

    pub fn animator(&self) -> Option<&A> {
        self.animator.as_ref()
    }

    pub fn animator_mut(&mut self) -> Option<&mut A> {
        self.animator.as_mut()
    }

    pub fn is_in_long_fall(&self) -> bool {
        self.is_in_long_fall
    }

    /// Surface normal sampled on the most recent grounded frame.
    pub fn surface_normal(&self) -> Vec3 {
        self.surface_normal
    }

    /// Local rotation of the visual model relative to the body.
    pub fn model_rotation(&self) -> Quat {
        self.model_rotation
    }

    /// Whether the land animation has played long enough to be interrupted.
    pub fn can_exit_land_animation(&self) -> bool {
        match self.last_land_time {
            Some(landed_at) => self.clock - landed_at > self.config.land_animation_duration,
            None => true,
        }
    }

    /// Advance one frame.
    ///
    /// # Arguments
    /// * `dt` - Frame time in seconds
    /// * `body` - Agent body, `None` skips the frame
    /// * `ground` - Current ground state
    /// * `move_axes` - Movement input for model facing
    pub fn update<B: PhysicsBody + ?Sized>(
        &mut self,
        dt: f32,
        body: Option<&B>,
        ground: &GroundState,
        move_axes: Vec2,
    ) {
        let (Some(animator), Some(body)) = (self.animator.as_mut(), body) else {
            return;
        };

        self.clock += dt.max(0.0);
        let grounded = ground.is_grounded();

        if grounded {
            self.surface_normal = body
                .raycast(
                    body.position(),
                    -body.up(),
                    self.config.surface_probe_distance,
                    self.surface_mask,
                )
                .map(|hit| hit.normal)
                .unwrap_or_else(|| body.up());
        }

        let velocity = body.linear_velocity();
        let vertical_velocity = velocity.dot(self.surface_normal);
        let speed = (velocity - self.surface_normal * vertical_velocity).length();
        animator.set_float(params::VERTICAL_VELOCITY, vertical_velocity);
        animator.set_float(params::SPEED, speed);
        animator.set_bool(params::IS_GROUNDED, grounded);
        animator.set_bool(params::IS_IN_LONG_FALL, self.is_in_long_fall);

        let left_ground = !grounded && self.was_grounded;
        let landed = grounded && !self.was_grounded;

        if left_ground {
            animator.set_trigger(params::JUMP);
            self.fall_start_time = self.clock;
            self.is_in_long_fall = false;
        }

        if !grounded
            && !self.is_in_long_fall
            && self.clock - self.fall_start_time >= self.config.short_fall_threshold
        {
            self.is_in_long_fall = true;
            animator.set_bool(params::IS_IN_LONG_FALL, true);
        }

        if landed {
            if self.is_in_long_fall {
                animator.set_trigger(params::LAND);
            }
            self.last_land_time = Some(self.clock);
        }

        if grounded && self.is_in_long_fall {
            self.is_in_long_fall = false;
            animator.set_bool(params::IS_IN_LONG_FALL, false);
        }

        self.was_grounded = grounded;

        let dead_zone = self.config.facing_dead_zone;
        if move_axes.x.abs() > dead_zone || move_axes.y.abs() > dead_zone {
            let target = facing_rotation(move_axes);
            let t = (self.config.facing_speed * dt).clamp(0.0, 1.0);
            self.model_rotation = self.model_rotation.slerp(target, t).normalize();
        }
    }
}
