//! Ground Probe
//!
//! One bounded ray per physics tick, cast from the body center along the
//! current gravity direction. The probe owns the [`GroundState`]; everything
//! else reads it through [`GroundProbe::state`].
//!
//! The recorded contact normal is always the negated gravity direction, not
//! the collider's geometric normal, so it matches surface-up even on sloped
//! geometry.

use glam::Vec3;

use crate::gravity::GravityState;
use crate::physics::{LayerMask, PhysicsBody};

/// Last surface the probe touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// Ray hit point
    pub point: Vec3,
    /// Negated gravity direction at the time of the hit
    pub normal: Vec3,
}

/// Grounded flag plus the sticky contact from the most recent grounded tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundState {
    is_grounded: bool,
    last_contact: Option<GroundContact>,
}

impl GroundState {
    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    /// Always the complement of [`is_grounded`](Self::is_grounded).
    pub fn is_falling(&self) -> bool {
        !self.is_grounded
    }

    /// Contact recorded on the most recent grounded tick, kept after leaving
    /// the ground. `None` until the first hit.
    pub fn last_contact(&self) -> Option<GroundContact> {
        self.last_contact
    }

    pub fn last_contact_point(&self) -> Option<Vec3> {
        self.last_contact.map(|c| c.point)
    }

    pub fn last_contact_normal(&self) -> Option<Vec3> {
        self.last_contact.map(|c| c.normal)
    }
}

/// Change of ground state produced by one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    /// Same as last tick
    None,
    /// Falling → grounded
    Landed,
    /// Grounded → falling
    LeftGround,
}

/// Per-tick ground detection along the active gravity axis.
#[derive(Debug, Clone)]
pub struct GroundProbe {
    distance: f32,
    mask: LayerMask,
    state: GroundState,
    /// Set by a push-off; the next probe ignores any hit because the body
    /// has not been stepped away from the surface yet
    skip_next_hit: bool,
}

impl GroundProbe {
    /// Create a probe that starts out falling with no contact.
    ///
    /// # Arguments
    /// * `distance` - Ray length from the body center (half height plus margin)
    /// * `mask` - Layers counted as ground
    pub fn new(distance: f32, mask: LayerMask) -> Self {
        Self {
            distance: distance.max(0.0),
            mask,
            state: GroundState::default(),
            skip_next_hit: false,
        }
    }

    /// Read-only snapshot of the ground state.
    pub fn state(&self) -> &GroundState {
        &self.state
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn mask(&self) -> LayerMask {
        self.mask
    }

    /// Re-evaluate the ground state against the current gravity direction.
    ///
    /// A hit within range marks the body grounded and overwrites the contact.
    /// A miss marks it falling and leaves the contact untouched. The first
    /// probe after [`mark_pushed_off`](Self::mark_pushed_off) counts as a miss.
    pub fn probe<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &B,
        gravity: &GravityState,
    ) -> GroundTransition {
        let down = gravity.down();
        let hit = if std::mem::take(&mut self.skip_next_hit) {
            None
        } else {
            body.raycast(body.position(), down, self.distance, self.mask)
        };
        let was_grounded = self.state.is_grounded;

        match hit {
            Some(hit) => {
                self.state.is_grounded = true;
                self.state.last_contact = Some(GroundContact {
                    point: hit.point,
                    normal: -down,
                });
            }
            None => {
                self.state.is_grounded = false;
            }
        }

        match (was_grounded, self.state.is_grounded) {
            (false, true) => {
                log::debug!(
                    "[GroundProbe] landed on {} surface at {:?}",
                    gravity.axis(),
                    self.state.last_contact_point().unwrap_or(Vec3::ZERO)
                );
                GroundTransition::Landed
            }
            (true, false) => {
                log::debug!("[GroundProbe] left ground");
                GroundTransition::LeftGround
            }
            _ => GroundTransition::None,
        }
    }

    /// Optimistically mark the body airborne after a push-off, ahead of the
    /// next probe. Returns `true` if the body was grounded.
    ///
    /// The next probe still sees the surface the body is leaving, so it is
    /// skipped once; the probe after that runs on the stepped body.
    pub fn mark_pushed_off(&mut self) -> bool {
        let was_grounded = self.state.is_grounded;
        self.state.is_grounded = false;
        self.skip_next_hit = was_grounded;
        was_grounded
    }
}
