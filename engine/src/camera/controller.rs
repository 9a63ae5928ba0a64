//! Gravity Camera Module
//!
//! Third-person follow camera for a gravity-switching agent. The camera eases
//! toward a target-relative position and a target rotation that is only
//! recomputed on landing, so the view does not spin while the agent tumbles.
//!
//! ## Offset freezing
//!
//! While falling, the first gravity key press captures the current
//! camera-to-target offset. The camera then holds that framing until the agent
//! lands (or leaves the ground again), instead of swinging around with the
//! body as it re-orients to the new surface.
//!
//! This is window-system agnostic - it only manages camera state and transformations.

use glam::{Quat, Vec3};

use crate::config::CameraConfig;
use crate::physics::types::{LOCAL_FORWARD, look_rotation, smoothing_factor};

/// Snapshot of the followed agent, taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    pub rotation: Quat,
    /// Agent forward axis in world space
    pub forward: Vec3,
    /// Active surface-up
    pub surface_up: Vec3,
    pub is_grounded: bool,
}

/// Follow state machine owned by the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFollowState {
    /// Rotation the camera eases toward
    pub target_rotation: Quat,
    /// Camera-to-target offset captured at an in-air gravity switch
    pub frozen_offset: Vec3,
    /// Target ground state seen on the previous update
    pub was_grounded: bool,
    /// Whether `frozen_offset` currently drives the position
    pub offset_frozen: bool,
}

/// Follow camera bound to one agent.
#[derive(Debug, Clone)]
pub struct GravityCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Camera orientation
    pub rotation: Quat,
    config: CameraConfig,
    follow: CameraFollowState,
}

impl Default for GravityCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl GravityCamera {
    /// Camera at the origin with identity rotation.
    pub fn new(config: CameraConfig) -> Self {
        Self::with_transform(config, Vec3::ZERO, Quat::IDENTITY)
    }

    /// Camera starting at the given transform. The initial rotation is also
    /// the initial target rotation.
    pub fn with_transform(config: CameraConfig, position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            follow: CameraFollowState {
                target_rotation: rotation,
                frozen_offset: config.default_offset,
                was_grounded: false,
                offset_frozen: false,
            },
            config,
        }
    }

    /// Camera placed at the target's default offset, looking along its forward.
    pub fn behind(config: CameraConfig, target: &CameraTarget) -> Self {
        let position = target.position + target.rotation * config.default_offset;
        let rotation = look_rotation(target.forward, target.surface_up);
        Self::with_transform(config, position, rotation)
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Read-only view of the follow state machine.
    pub fn follow_state(&self) -> &CameraFollowState {
        &self.follow
    }

    /// Get the forward direction vector.
    pub fn get_forward(&self) -> Vec3 {
        self.rotation * LOCAL_FORWARD
    }

    /// Position the camera eases toward this frame.
    ///
    /// Grounded targets always use the default offset rotated by the target
    /// orientation. Falling targets use the frozen offset when one is held.
    pub fn desired_position(&self, target: &CameraTarget) -> Vec3 {
        if !target.is_grounded && self.follow.offset_frozen {
            target.position + self.follow.frozen_offset
        } else {
            target.position + target.rotation * self.config.default_offset
        }
    }

    /// Late-update the camera after the agent has moved.
    ///
    /// # Arguments
    /// * `dt` - Frame time in seconds
    /// * `target` - Followed agent; `None` skips the frame entirely
    /// * `gravity_key_pressed` - Whether a gravity key fired this frame
    pub fn update(&mut self, dt: f32, target: Option<&CameraTarget>, gravity_key_pressed: bool) {
        let Some(target) = target else {
            return;
        };

        let grounded = target.is_grounded;
        let follow = &mut self.follow;

        if !grounded && follow.was_grounded {
            follow.offset_frozen = false;
        } else if !grounded && gravity_key_pressed && !follow.offset_frozen {
            follow.frozen_offset = self.position - target.position;
            follow.offset_frozen = true;
            log::debug!("[GravityCamera] froze offset {:?}", follow.frozen_offset);
        } else if grounded && !follow.was_grounded {
            follow.target_rotation = look_rotation(target.forward, target.surface_up);
            follow.offset_frozen = false;
            log::debug!("[GravityCamera] landed, re-aligning to {:?}", target.surface_up);
        }
        follow.was_grounded = grounded;

        let desired = self.desired_position(target);
        self.position = self
            .position
            .lerp(desired, smoothing_factor(self.config.follow_speed, dt));
        self.rotation = self
            .rotation
            .slerp(
                self.follow.target_rotation,
                smoothing_factor(self.config.rotate_speed, dt),
            )
            .normalize();
    }
}
