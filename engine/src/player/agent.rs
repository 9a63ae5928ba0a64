//! Gravity cube agent
//!
//! Composes the surface/gravity model, the ground probe, locomotion and body
//! orientation around an injected body, input source and feedback sink. A
//! host drives it through two entry points:
//!
//! - [`GravityCube::on_fixed_tick`] once per physics step: gravity force, then
//!   the ground probe, then locomotion reading that probe's result.
//! - [`GravityCube::on_variable_tick`] once per rendered frame: input
//!   sampling, push-off, gravity switching, orientation smoothing.
//!
//! # Example
//!
//! ```rust,ignore
//! use gravity_cube_engine::config::GravityCubeConfig;
//! use gravity_cube_engine::feedback::LogFeedback;
//! use gravity_cube_engine::input::KeyboardInput;
//! use gravity_cube_engine::physics::SandboxBody;
//! use gravity_cube_engine::player::GravityCube;
//!
//! let mut cube = GravityCube::new(body, KeyboardInput::new(), LogFeedback, &GravityCubeConfig::default());
//! cube.on_fixed_tick(0.02);
//! cube.on_variable_tick(1.0 / 60.0);
//! ```

use glam::Vec3;

use super::ground_probe::{GroundProbe, GroundState, GroundTransition};
use super::movement_controller::{LocomotionController, LocomotionStep};
use super::orientation::BodyOrientation;
use crate::camera::CameraTarget;
use crate::config::{GravityCubeConfig, LocomotionParams};
use crate::feedback::{FeedbackSink, Rgba};
use crate::gravity::{FeedbackCue, GravityAxis, GravityState, SurfaceGravity};
use crate::input::{InputFrame, InputSource};
use crate::physics::PhysicsBody;

/// Length of the gravity direction gizmo.
pub const GRAVITY_GIZMO_LENGTH: f32 = 1.5;

/// Length of the surface-up gizmo.
pub const SURFACE_UP_GIZMO_LENGTH: f32 = 1.0;

/// Debug line for editor-style overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Rgba,
}

/// What one fixed tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTickReport {
    pub transition: GroundTransition,
    pub locomotion: LocomotionStep,
}

/// Player-controlled gravity cube.
pub struct GravityCube<B: PhysicsBody, I: InputSource, F: FeedbackSink> {
    body: B,
    input: I,
    feedback: F,
    gravity: SurfaceGravity,
    probe: GroundProbe,
    locomotion: LocomotionController,
    orientation: BodyOrientation,
    /// Most recent input sample; movement axes feed the fixed tick
    last_input: InputFrame,
}

impl<B: PhysicsBody, I: InputSource, F: FeedbackSink> GravityCube<B, I, F> {
    /// Build the agent and run the initial silent gravity setup (tint, no audio).
    pub fn new(body: B, input: I, feedback: F, config: &GravityCubeConfig) -> Self {
        let params = config.locomotion;
        let mut cube = Self {
            body,
            input,
            feedback,
            gravity: SurfaceGravity::new(
                GravityAxis::Down,
                params.gravity_magnitude,
                config.feedback.clone(),
            ),
            probe: GroundProbe::new(params.ground_probe_distance, config.ground_mask),
            locomotion: LocomotionController::new(params),
            orientation: BodyOrientation::new(params.rotation_speed),
            last_input: InputFrame::default(),
        };

        let event = cube.gravity.set_gravity(GravityAxis::Down, FeedbackCue::Silent);
        cube.feedback.gravity_changed(&event);
        cube
    }

    /// Per-frame update: sample input, then push off, switch gravity and tilt
    /// the body toward surface-up.
    pub fn on_variable_tick(&mut self, dt: f32) -> InputFrame {
        let frame = self.input.sample();
        self.last_input = frame;

        if frame.jump_pressed && self.probe.state().is_grounded() {
            self.push_off();
        }

        if self.probe.state().is_falling() {
            if let Some(axis) = frame.gravity_request() {
                self.switch_gravity(axis);
            }
        }

        self.orientation
            .update(&mut self.body, self.gravity.state().surface_up(), dt);

        frame
    }

    /// Physics step: queue gravity, re-probe the ground along the current
    /// gravity direction, then apply locomotion with the latest move input.
    pub fn on_fixed_tick(&mut self, dt: f32) -> FixedTickReport {
        self.locomotion.apply_gravity(&mut self.body, self.gravity.state());

        let transition = self.probe.probe(&self.body, self.gravity.state());

        let locomotion = self.locomotion.move_on_surface(
            &mut self.body,
            self.probe.state(),
            self.gravity.state(),
            self.last_input.move_axes,
            dt,
        );

        FixedTickReport {
            transition,
            locomotion,
        }
    }

    /// Redirect gravity. Only allowed while falling; returns whether the
    /// switch happened.
    pub fn switch_gravity(&mut self, axis: GravityAxis) -> bool {
        if self.probe.state().is_grounded() {
            log::debug!("[GravityCube] ignored switch to {axis} while grounded");
            return false;
        }
        let previous = self.gravity.axis();
        self.set_gravity(axis);
        log::info!("[GravityCube] gravity {previous} -> {axis}");
        true
    }

    /// Make `axis` active without gating, with audible feedback.
    pub fn set_gravity(&mut self, axis: GravityAxis) {
        let event = self.gravity.set_gravity(axis, FeedbackCue::Audible);
        self.feedback.gravity_changed(&event);
    }

    /// Push off the current surface. Returns `false` when airborne.
    pub fn push_off(&mut self) -> bool {
        let event = self.locomotion.push_off(
            &mut self.body,
            &mut self.probe,
            self.gravity.state(),
            self.gravity.palette(),
        );
        match event {
            Some(event) => {
                self.feedback.pushed_off(&event);
                true
            }
            None => false,
        }
    }

    /// Snapshot for the follow camera.
    pub fn camera_target(&self) -> CameraTarget {
        CameraTarget {
            position: self.body.position(),
            rotation: self.body.rotation(),
            forward: self.body.forward(),
            surface_up: self.gravity.state().surface_up(),
            is_grounded: self.probe.state().is_grounded(),
        }
    }

    /// Gravity direction (cyan) and surface-up (magenta) lines from the body center.
    pub fn debug_gizmos(&self) -> [DebugLine; 2] {
        let origin = self.body.position();
        let state = self.gravity.state();
        [
            DebugLine {
                start: origin,
                end: origin + state.down() * GRAVITY_GIZMO_LENGTH,
                color: [0.0, 1.0, 1.0, 1.0],
            },
            DebugLine {
                start: origin,
                end: origin + state.surface_up() * SURFACE_UP_GIZMO_LENGTH,
                color: [1.0, 0.0, 1.0, 1.0],
            },
        ]
    }

    pub fn gravity_state(&self) -> &GravityState {
        self.gravity.state()
    }

    pub fn axis(&self) -> GravityAxis {
        self.gravity.axis()
    }

    pub fn ground_state(&self) -> &GroundState {
        self.probe.state()
    }

    pub fn is_grounded(&self) -> bool {
        self.probe.state().is_grounded()
    }

    pub fn is_falling(&self) -> bool {
        self.probe.state().is_falling()
    }

    pub fn params(&self) -> &LocomotionParams {
        self.locomotion.params()
    }

    pub fn last_input(&self) -> &InputFrame {
        &self.last_input
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }
}
