//! Camera Module
//!
//! Follow camera for the gravity cube. This module is window-system agnostic -
//! it only deals with camera state and math.

pub mod controller;

pub use controller::{CameraFollowState, CameraTarget, GravityCamera};
