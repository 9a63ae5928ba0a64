//! Keyboard Input Module
//!
//! Tracks held keys and the keys that went down this frame. Decoupled from
//! any windowing system: hosts translate their own key events into
//! [`KeyCode`] and call [`KeyboardState::handle_key`].

use std::collections::HashSet;

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Gravity keys
    Q,
    E,
    R,
    F,

    Space,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Complete keyboard state tracking.
///
/// A key produces a press edge only on the transition from released to held;
/// OS key repeat of a held key is ignored. Edges live until
/// [`end_frame`](Self::end_frame).
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    pressed_this_frame: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the event changed the held state of `key`.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Unknown {
            return false;
        }
        if pressed {
            let newly_down = self.held.insert(key);
            if newly_down {
                self.pressed_this_frame.insert(key);
            }
            newly_down
        } else {
            self.held.remove(&key)
        }
    }

    /// Whether `key` is currently held.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether `key` went down since the last [`end_frame`](Self::end_frame).
    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed_this_frame.contains(&key)
    }

    /// Keys currently held.
    pub fn held_keys(&self) -> &HashSet<KeyCode> {
        &self.held
    }

    /// Keys that went down this frame.
    pub fn pressed_keys(&self) -> &HashSet<KeyCode> {
        &self.pressed_this_frame
    }

    pub fn any_held(&self) -> bool {
        !self.held.is_empty()
    }

    /// Clear press edges. Call once per sampled frame.
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        self.held.clear();
        self.pressed_this_frame.clear();
    }
}
