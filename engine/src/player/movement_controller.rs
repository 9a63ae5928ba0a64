//! Locomotion Controller
//!
//! Converts player intent and ground state into forces on a [`PhysicsBody`].
//! Movement is always surface relative: the body's local forward/right axes
//! are flattened onto the plane perpendicular to the active surface-up.
//!
//! # Physics Model (defaults)
//!
//! - Max speed: 8.0 m/s grounded and airborne
//! - Acceleration cap: 40.0 m/s² grounded, 8.0 m/s² airborne
//! - Gravity: 25.0 m/s² along the active axis
//! - Push-off: 6.0 m/s velocity change along local up
//!
//! # Usage
//!
//! ```rust,ignore
//! use gravity_cube_engine::player::LocomotionController;
//!
//! let controller = LocomotionController::new(params);
//!
//! // Each fixed tick, after the ground probe:
//! controller.apply_gravity(&mut body, gravity.state());
//! controller.move_on_surface(&mut body, probe.state(), gravity.state(), move_axes, dt);
//! ```

use glam::{Quat, Vec2, Vec3};

use super::ground_probe::{GroundProbe, GroundState};
use crate::config::{FeedbackPalette, LocomotionParams};
use crate::feedback::PushOff;
use crate::gravity::GravityState;
use crate::physics::types::{look_rotation, normalize_or_degenerate, project_on_plane};
use crate::physics::{ForceMode, PhysicsBody};

/// Forces computed by one [`LocomotionController::move_on_surface`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionStep {
    /// Surface-plane intent, magnitude at most 1
    pub wish_direction: Vec3,
    /// Lateral velocity before this tick's forces
    pub lateral_velocity: Vec3,
    /// Approach acceleration, magnitude at most the accel cap
    pub acceleration: Vec3,
    /// Deceleration removing speed above the cap, zero when under it
    pub correction: Vec3,
}

/// Compose a surface-plane wish direction from the body axes and move input.
///
/// Each axis is projected onto the plane perpendicular to `surface_up` and
/// normalized; an axis parallel to `surface_up` contributes nothing. The
/// result is clamped to length 1 but never scaled up, so partial input keeps
/// its magnitude.
///
/// # Arguments
/// * `forward` - Body forward axis in world space
/// * `right` - Body right axis in world space
/// * `surface_up` - Unit vector opposite gravity
/// * `move_axes` - x = right, y = forward
pub fn wish_direction(forward: Vec3, right: Vec3, surface_up: Vec3, move_axes: Vec2) -> Vec3 {
    let forward = normalize_or_degenerate(project_on_plane(forward, surface_up));
    let right = normalize_or_degenerate(project_on_plane(right, surface_up));

    (forward * move_axes.y + right * move_axes.x).clamp_length_max(1.0)
}

/// Surface-relative movement and push-off for one agent.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    params: LocomotionParams,
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::new(LocomotionParams::default())
    }
}

impl LocomotionController {
    pub fn new(params: LocomotionParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LocomotionParams {
        &self.params
    }

    /// Queue this tick's gravity acceleration on the body.
    pub fn apply_gravity<B: PhysicsBody + ?Sized>(&self, body: &mut B, gravity: &GravityState) {
        body.add_force(gravity.gravity_vector(), ForceMode::Acceleration);
    }

    /// Accelerate the body toward the target lateral velocity.
    ///
    /// The approach acceleration is capped by magnitude (direction kept). If
    /// the lateral velocity after that acceleration would exceed the speed cap,
    /// a second acceleration removes exactly the excess over this tick.
    ///
    /// # Arguments
    /// * `body` - Body to push
    /// * `ground` - Ground state from this tick's probe
    /// * `gravity` - Active gravity
    /// * `move_axes` - x = right, y = forward, each in [-1, 1]
    /// * `dt` - Fixed tick length in seconds
    pub fn move_on_surface<B: PhysicsBody + ?Sized>(
        &self,
        body: &mut B,
        ground: &GroundState,
        gravity: &GravityState,
        move_axes: Vec2,
        dt: f32,
    ) -> LocomotionStep {
        if dt <= 0.0 {
            return LocomotionStep::default();
        }

        let surface_up = gravity.surface_up();
        let grounded = ground.is_grounded();
        let max_speed = self.params.max_speed(grounded);
        let accel = self.params.accel(grounded);

        let wish = wish_direction(body.forward(), body.right(), surface_up, move_axes);
        let lateral = project_on_plane(body.linear_velocity(), surface_up);

        let target = wish * max_speed;
        let acceleration = ((target - lateral) / dt).clamp_length_max(accel);
        body.add_force(acceleration, ForceMode::Acceleration);

        // Hard ceiling on the lateral velocity the step will produce
        let predicted = lateral + acceleration * dt;
        let predicted_speed = predicted.length();
        let correction = if predicted_speed > max_speed {
            let excess = predicted * ((predicted_speed - max_speed) / predicted_speed);
            -excess / dt
        } else {
            Vec3::ZERO
        };
        if correction != Vec3::ZERO {
            body.add_force(correction, ForceMode::Acceleration);
        }

        log::trace!(
            "[Locomotion] grounded={} wish={:?} lateral={:.2} accel={:?} correction={:?}",
            grounded,
            wish,
            lateral.length(),
            acceleration,
            correction
        );

        LocomotionStep {
            wish_direction: wish,
            lateral_velocity: lateral,
            acceleration,
            correction,
        }
    }

    /// Push off the current surface.
    ///
    /// Only fires while grounded. Applies an instant velocity change of
    /// `push_impulse` along the body's local up, marks the probe airborne
    /// before the next probe runs, and returns the feedback event.
    pub fn push_off<B: PhysicsBody + ?Sized>(
        &self,
        body: &mut B,
        probe: &mut GroundProbe,
        gravity: &GravityState,
        palette: &FeedbackPalette,
    ) -> Option<PushOff> {
        if !probe.state().is_grounded() {
            return None;
        }

        body.add_force(body.up() * self.params.push_impulse, ForceMode::VelocityChange);
        probe.mark_pushed_off();

        let surface_up = gravity.surface_up();
        let event = PushOff {
            position: push_off_vfx_position(
                probe.state(),
                body.position(),
                body.half_extents(),
                surface_up,
                palette,
            ),
            rotation: push_off_vfx_rotation(surface_up),
            volume: palette.sfx_volume,
        };
        log::debug!(
            "[Locomotion] push-off from {} surface, velocity now {:?}",
            gravity.axis(),
            body.linear_velocity()
        );

        Some(event)
    }
}

/// Where push-off particles spawn.
///
/// Just above the last contact when one exists, otherwise below the body
/// center along `-surface_up` by a fraction of the body's extent length.
pub fn push_off_vfx_position(
    ground: &GroundState,
    body_position: Vec3,
    half_extents: Vec3,
    surface_up: Vec3,
    palette: &FeedbackPalette,
) -> Vec3 {
    match ground.last_contact() {
        Some(contact) => contact.point + contact.normal * palette.vfx_surface_offset,
        None => body_position - surface_up * (half_extents.length() * palette.fallback_extent_scale),
    }
}

/// Particle orientation: forward along `surface_up`.
pub fn push_off_vfx_rotation(surface_up: Vec3) -> Quat {
    look_rotation(surface_up, Vec3::NEG_Z)
}
