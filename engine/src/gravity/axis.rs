//! Gravity axis
//!
//! The four cardinal directions that can act as "down".

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Cardinal world axis currently acting as "down".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GravityAxis {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl GravityAxis {
    /// Every axis, in table order.
    pub const ALL: [GravityAxis; 4] = [
        GravityAxis::Down,
        GravityAxis::Up,
        GravityAxis::Left,
        GravityAxis::Right,
    ];

    /// Unit world-space direction gravity pulls toward.
    pub const fn direction(self) -> Vec3 {
        match self {
            GravityAxis::Down => Vec3::NEG_Y,
            GravityAxis::Up => Vec3::Y,
            GravityAxis::Left => Vec3::NEG_X,
            GravityAxis::Right => Vec3::X,
        }
    }

    /// Position of this axis in [`GravityAxis::ALL`].
    pub const fn index(self) -> usize {
        match self {
            GravityAxis::Down => 0,
            GravityAxis::Up => 1,
            GravityAxis::Left => 2,
            GravityAxis::Right => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            GravityAxis::Down => "down",
            GravityAxis::Up => "up",
            GravityAxis::Left => "left",
            GravityAxis::Right => "right",
        }
    }
}

impl fmt::Display for GravityAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
