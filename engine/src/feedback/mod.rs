//! Feedback sinks
//!
//! Fire-and-forget hooks for the presentation layer: body tint, one-shot
//! audio and particle spawns. The controller emits events and never waits on
//! or reads anything back from a sink.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::gravity::GravityAxis;

/// Linear RGBA color.
pub type Rgba = [f32; 4];

/// Per-axis tint and cue settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackPalette {
    pub color_down: Rgba,
    pub color_up: Rgba,
    pub color_left: Rgba,
    pub color_right: Rgba,
    /// One-shot audio volume (0..=1)
    pub sfx_volume: f32,
    /// Push-off particles sit this far above the last contact point
    pub vfx_surface_offset: f32,
    /// Without contact data, particles spawn this fraction of the body's
    /// extent length below its center
    pub fallback_extent_scale: f32,
}

impl Default for FeedbackPalette {
    fn default() -> Self {
        Self {
            color_down: [0.0, 0.0, 1.0, 1.0],
            color_up: [1.0, 0.0, 0.0, 1.0],
            color_left: [0.0, 1.0, 0.0, 1.0],
            color_right: [1.0, 0.92, 0.016, 1.0],
            sfx_volume: 0.8,
            vfx_surface_offset: 0.02,
            fallback_extent_scale: 0.5,
        }
    }
}

impl FeedbackPalette {
    /// Body tint for a gravity axis.
    pub fn tint(&self, axis: GravityAxis) -> Rgba {
        match axis {
            GravityAxis::Down => self.color_down,
            GravityAxis::Up => self.color_up,
            GravityAxis::Left => self.color_left,
            GravityAxis::Right => self.color_right,
        }
    }
}

/// Emitted on every gravity set, including redundant ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityChanged {
    pub axis: GravityAxis,
    pub tint: Rgba,
    pub play_sfx: bool,
    pub volume: f32,
}

/// Emitted once per push-off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushOff {
    /// Particle spawn position
    pub position: Vec3,
    /// Particle orientation (forward along surface-up)
    pub rotation: Quat,
    pub volume: f32,
}

/// Presentation-side receiver of controller events.
pub trait FeedbackSink {
    fn gravity_changed(&mut self, event: &GravityChanged);
    fn pushed_off(&mut self, event: &PushOff);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn gravity_changed(&mut self, _event: &GravityChanged) {}
    fn pushed_off(&mut self, _event: &PushOff) {}
}

/// Writes events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn gravity_changed(&mut self, event: &GravityChanged) {
        log::info!(
            "[Feedback] tint {:?} for gravity {} (sfx: {})",
            event.tint,
            event.axis,
            event.play_sfx
        );
    }

    fn pushed_off(&mut self, event: &PushOff) {
        log::info!("[Feedback] push-off burst at {:?}", event.position);
    }
}

/// Keeps every event, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    pub gravity_events: Vec<GravityChanged>,
    pub push_events: Vec<PushOff>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of gravity events that asked for audio.
    pub fn audible_gravity_cues(&self) -> usize {
        self.gravity_events.iter().filter(|e| e.play_sfx).count()
    }

    pub fn clear(&mut self) {
        self.gravity_events.clear();
        self.push_events.clear();
    }
}

impl FeedbackSink for RecordingFeedback {
    fn gravity_changed(&mut self, event: &GravityChanged) {
        self.gravity_events.push(*event);
    }

    fn pushed_off(&mut self, event: &PushOff) {
        self.push_events.push(*event);
    }
}

impl<T: FeedbackSink + ?Sized> FeedbackSink for Box<T> {
    fn gravity_changed(&mut self, event: &GravityChanged) {
        (**self).gravity_changed(event);
    }

    fn pushed_off(&mut self, event: &PushOff) {
        (**self).pushed_off(event);
    }
}
