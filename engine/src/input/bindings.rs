//! Input Bindings Module
//!
//! Maps physical keys to logical actions. Several keys may drive the same
//! action (WASD and the arrow keys both move), but each key drives at most one.

use std::collections::HashMap;

use glam::Vec2;

use super::{KeyCode, KeyboardState};
use crate::gravity::GravityAxis;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W, ArrowUp)
    MoveForward,
    /// Move backward (default: S, ArrowDown)
    MoveBack,
    /// Move left (default: A, ArrowLeft)
    MoveLeft,
    /// Move right (default: D, ArrowRight)
    MoveRight,
    /// Push off the current surface (default: Space)
    Jump,
    /// Gravity toward -Y (default: F)
    GravityDown,
    /// Gravity toward +Y (default: R)
    GravityUp,
    /// Gravity toward -X (default: Q)
    GravityLeft,
    /// Gravity toward +X (default: E)
    GravityRight,
}

impl InputAction {
    /// Gravity action that selects `axis`.
    pub const fn for_gravity(axis: GravityAxis) -> InputAction {
        match axis {
            GravityAxis::Down => InputAction::GravityDown,
            GravityAxis::Up => InputAction::GravityUp,
            GravityAxis::Left => InputAction::GravityLeft,
            GravityAxis::Right => InputAction::GravityRight,
        }
    }
}

/// Maps physical keys to logical actions, supporting customizable key bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Map from logical action to its keys (for reverse lookup and display)
    action_to_keys: HashMap<InputAction, Vec<KeyCode>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W / ArrowUp = MoveForward
    /// - S / ArrowDown = MoveBack
    /// - A / ArrowLeft = MoveLeft
    /// - D / ArrowRight = MoveRight
    /// - Space = Jump
    /// - F = GravityDown, R = GravityUp, Q = GravityLeft, E = GravityRight
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::F, InputAction::GravityDown);
        bindings.bind(KeyCode::R, InputAction::GravityUp);
        bindings.bind(KeyCode::Q, InputAction::GravityLeft);
        bindings.bind(KeyCode::E, InputAction::GravityRight);

        bindings
    }

    /// Bindings with nothing mapped.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action, in addition to the action's
    /// existing keys.
    ///
    /// If the key was previously bound to another action, that binding is removed.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.unbind_key(key);
        self.key_to_action.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Remove every key bound to a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(keys) = self.action_to_keys.remove(&action) {
            for key in keys {
                self.key_to_action.remove(&key);
            }
        }
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Keys bound to a logical action, in binding order.
    pub fn get_keys(&self, action: InputAction) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any key bound to `action` is held.
    pub fn is_action_held(&self, action: InputAction, keyboard: &KeyboardState) -> bool {
        self.get_keys(action).iter().any(|k| keyboard.is_held(*k))
    }

    /// Whether any key bound to `action` went down this frame.
    pub fn was_action_pressed(&self, action: InputAction, keyboard: &KeyboardState) -> bool {
        self.get_keys(action).iter().any(|k| keyboard.was_pressed(*k))
    }

    /// Movement axes from held keys: x = right - left, y = forward - back.
    pub fn move_axes(&self, keyboard: &KeyboardState) -> Vec2 {
        let axis = |pos: InputAction, neg: InputAction| {
            (self.is_action_held(pos, keyboard) as i32 - self.is_action_held(neg, keyboard) as i32)
                as f32
        };
        Vec2::new(
            axis(InputAction::MoveRight, InputAction::MoveLeft),
            axis(InputAction::MoveForward, InputAction::MoveBack),
        )
    }

    /// Get all current bindings as key-action pairs.
    pub fn all_bindings(&self) -> impl Iterator<Item = (KeyCode, InputAction)> + '_ {
        self.key_to_action.iter().map(|(&k, &a)| (k, a))
    }
}
