//! Surface/Gravity Model
//!
//! Holds the active gravity axis and exposes the axis switch. A switch is a
//! pure state transition: the new [`GravityState`] replaces the old one in a
//! single assignment, and the caller receives a [`GravityChanged`] event to
//! forward to the feedback sinks.
//!
//! Re-applying the current axis is legal and produces the event again.

pub mod axis;
pub mod state;

pub use axis::GravityAxis;
pub use state::GravityState;

use crate::feedback::{FeedbackPalette, GravityChanged};

/// Whether a gravity change should play its audio cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    /// Tint and audio
    Audible,
    /// Tint only (initial setup)
    Silent,
}

/// Owner of the agent's [`GravityState`].
#[derive(Debug, Clone)]
pub struct SurfaceGravity {
    state: GravityState,
    palette: FeedbackPalette,
}

impl SurfaceGravity {
    /// Create the model on `axis` without emitting feedback.
    ///
    /// Callers wanting the initial tint should follow up with
    /// [`set_gravity`](Self::set_gravity) and [`FeedbackCue::Silent`].
    pub fn new(axis: GravityAxis, magnitude: f32, palette: FeedbackPalette) -> Self {
        Self {
            state: GravityState::new(axis, magnitude),
            palette,
        }
    }

    /// Read-only snapshot of the current gravity.
    pub fn state(&self) -> &GravityState {
        &self.state
    }

    pub fn axis(&self) -> GravityAxis {
        self.state.axis()
    }

    pub fn palette(&self) -> &FeedbackPalette {
        &self.palette
    }

    /// Make `axis` the active gravity axis.
    ///
    /// Recomputes the gravity vector and surface-up atomically and returns the
    /// feedback event keyed by the new axis.
    pub fn set_gravity(&mut self, axis: GravityAxis, cue: FeedbackCue) -> GravityChanged {
        self.state = GravityState::new(axis, self.state.magnitude());

        GravityChanged {
            axis,
            tint: self.palette.tint(axis),
            play_sfx: cue == FeedbackCue::Audible,
            volume: self.palette.sfx_volume,
        }
    }
}
