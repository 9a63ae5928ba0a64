//! Player Module
//!
//! The gravity cube's control loop.
//!
//! # Components
//!
//! - [`GroundProbe`] - Per-tick ray along gravity; owns [`GroundState`]
//! - [`LocomotionController`] - Surface-relative acceleration, speed cap, push-off
//! - [`BodyOrientation`] - Rate-limited tilt of the body toward surface-up
//! - [`AnimationDriver`] - Animator parameters, jump/land triggers, model facing
//! - [`GravityCube`] - Composes the above around an injected body, input and feedback

pub mod agent;
pub mod animation;
pub mod ground_probe;
pub mod movement_controller;
pub mod orientation;

pub use agent::{
    DebugLine, FixedTickReport, GRAVITY_GIZMO_LENGTH, GravityCube, SURFACE_UP_GIZMO_LENGTH,
};
pub use animation::{
    AnimationDriver, Animator, LogAnimator, RecordingAnimator, facing_rotation,
    params as anim_params,
};
pub use ground_probe::{GroundContact, GroundProbe, GroundState, GroundTransition};
pub use movement_controller::{
    LocomotionController, LocomotionStep, push_off_vfx_position, push_off_vfx_rotation,
    wish_direction,
};
pub use orientation::{BodyOrientation, surface_alignment_target};
