//! Input Module
//!
//! Platform-agnostic input for the gravity cube. Hosts feed key events into a
//! [`KeyboardState`]; an [`InputSource`] turns the current state into one
//! [`InputFrame`] per sampled tick, with jump and gravity keys edge-triggered.
//!
//! # Example
//!
//! ```rust,ignore
//! use gravity_cube_engine::input::{InputSource, KeyCode, KeyboardInput};
//!
//! let mut input = KeyboardInput::new();
//! input.handle_key(KeyCode::Space, true);
//!
//! let frame = input.sample();
//! assert!(frame.jump_pressed);
//! // Held, but no longer an edge
//! assert!(!input.sample().jump_pressed);
//! ```

pub mod bindings;
pub mod keyboard;

use std::collections::VecDeque;

use glam::{Quat, Vec2, Vec3};

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState};

use crate::gravity::GravityAxis;
use crate::physics::types::{LOCAL_FORWARD, LOCAL_RIGHT, normalize_or_degenerate, project_on_plane};

/// Priority used when several gravity keys fire in the same tick.
const GRAVITY_PRIORITY: [GravityAxis; 4] = [
    GravityAxis::Down,
    GravityAxis::Up,
    GravityAxis::Right,
    GravityAxis::Left,
];

/// Input sampled for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// x = right, y = forward, each in [-1, 1]
    pub move_axes: Vec2,
    /// True only on the tick the jump key went down
    pub jump_pressed: bool,
    /// Press edges per gravity axis, indexed by [`GravityAxis::index`]
    pub gravity_pressed: [bool; 4],
}

impl InputFrame {
    /// Frame with only movement input.
    pub fn moving(move_axes: Vec2) -> Self {
        Self {
            move_axes: move_axes.clamp(Vec2::NEG_ONE, Vec2::ONE),
            ..Self::default()
        }
    }

    /// Builder: set the jump edge.
    pub fn with_jump(mut self) -> Self {
        self.jump_pressed = true;
        self
    }

    /// Builder: set the press edge for a gravity axis.
    pub fn with_gravity(mut self, axis: GravityAxis) -> Self {
        self.gravity_pressed[axis.index()] = true;
        self
    }

    /// The gravity axis requested this tick, if any.
    ///
    /// Simultaneous presses resolve by fixed priority: Down, Up, Right, Left.
    pub fn gravity_request(&self) -> Option<GravityAxis> {
        GRAVITY_PRIORITY
            .into_iter()
            .find(|axis| self.gravity_pressed[axis.index()])
    }

    pub fn any_gravity_pressed(&self) -> bool {
        self.gravity_pressed.iter().any(|p| *p)
    }
}

/// Source of per-tick input frames.
pub trait InputSource {
    /// Produce the frame for this tick. Edges are consumed by sampling.
    fn sample(&mut self) -> InputFrame;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn sample(&mut self) -> InputFrame {
        (**self).sample()
    }
}

/// Keyboard-backed input source.
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    pub keyboard: KeyboardState,
    pub bindings: KeyBindings,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            bindings,
        }
    }

    /// Forward a host key event.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keyboard.handle_key(key, pressed)
    }
}

impl InputSource for KeyboardInput {
    fn sample(&mut self) -> InputFrame {
        let mut frame = InputFrame {
            move_axes: self.bindings.move_axes(&self.keyboard),
            jump_pressed: self
                .bindings
                .was_action_pressed(InputAction::Jump, &self.keyboard),
            gravity_pressed: [false; 4],
        };
        for axis in GravityAxis::ALL {
            frame.gravity_pressed[axis.index()] = self
                .bindings
                .was_action_pressed(InputAction::for_gravity(axis), &self.keyboard);
        }

        self.keyboard.end_frame();
        frame
    }
}

/// Replays queued frames, then neutral input once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: InputFrame) {
        self.frames.push_back(frame);
    }

    /// Queue `frame` for `count` consecutive ticks.
    pub fn push_repeated(&mut self, frame: InputFrame, count: usize) {
        self.frames.extend(std::iter::repeat_n(frame, count));
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Turn movement axes into a world direction relative to the camera.
///
/// The camera's forward and right axes are flattened onto the plane
/// perpendicular to `surface_up` before composing. The result is unit length,
/// or zero when there is no input.
pub fn camera_relative_direction(axes: Vec2, camera_rotation: Quat, surface_up: Vec3) -> Vec3 {
    let forward = normalize_or_degenerate(project_on_plane(camera_rotation * LOCAL_FORWARD, surface_up));
    let right = normalize_or_degenerate(project_on_plane(camera_rotation * LOCAL_RIGHT, surface_up));

    normalize_or_degenerate(forward * axes.y + right * axes.x)
}
