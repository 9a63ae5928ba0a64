//! Camera Tests - Follow Rules and Offset Freezing
//!
//! Tests for `GravityCamera`: the grounded/falling state machine, frozen
//! offsets during in-air gravity switches and re-alignment on landing.

use glam::{Quat, Vec3};
use gravity_cube_engine::camera::{CameraTarget, GravityCamera};
use gravity_cube_engine::config::CameraConfig;
use gravity_cube_engine::physics::types::{LOCAL_FORWARD, look_rotation};

const DT: f32 = 1.0 / 60.0;

fn target(position: Vec3, surface_up: Vec3, grounded: bool) -> CameraTarget {
    CameraTarget {
        position,
        rotation: Quat::IDENTITY,
        forward: LOCAL_FORWARD,
        surface_up,
        is_grounded: grounded,
    }
}

fn same_rotation(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 0.9999
}

/// Camera that has seen a grounded target and then watched it leave the floor.
fn camera_after_take_off() -> GravityCamera {
    let mut camera = GravityCamera::default();
    camera.update(DT, Some(&target(Vec3::ZERO, Vec3::Y, true)), false);
    camera.update(DT, Some(&target(Vec3::new(0.0, 1.0, 0.0), Vec3::Y, false)), false);
    camera
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_default() {
    let camera = GravityCamera::default();

    assert_eq!(camera.position, Vec3::ZERO);
    assert_eq!(camera.config().default_offset, Vec3::new(0.0, 3.0, 10.0));
    assert!(!camera.follow_state().offset_frozen);
    assert!(!camera.follow_state().was_grounded);
    assert_eq!(camera.follow_state().frozen_offset, Vec3::new(0.0, 3.0, 10.0));
}

#[test]
fn test_camera_behind_target() {
    let t = target(Vec3::new(2.0, 0.5, 0.0), Vec3::Y, true);
    let camera = GravityCamera::behind(CameraConfig::default(), &t);

    assert_eq!(camera.position, Vec3::new(2.0, 3.5, 10.0));
    assert!((camera.get_forward() - LOCAL_FORWARD).length() < 0.001);
}

// ============================================================================
// Follow state machine
// ============================================================================

#[test]
fn test_leaving_ground_clears_frozen_offset() {
    let mut camera = camera_after_take_off();
    assert!(!camera.follow_state().offset_frozen);
    assert!(!camera.follow_state().was_grounded);

    // Freeze, land, take off again: the freeze does not survive
    camera.update(DT, Some(&target(Vec3::new(0.0, 2.0, 0.0), Vec3::Y, false)), true);
    assert!(camera.follow_state().offset_frozen);
    camera.update(DT, Some(&target(Vec3::ZERO, Vec3::Y, true)), false);
    camera.update(DT, Some(&target(Vec3::new(0.0, 1.0, 0.0), Vec3::Y, false)), false);
    assert!(!camera.follow_state().offset_frozen);
}

#[test]
fn test_gravity_key_in_air_freezes_current_offset() {
    let mut camera = camera_after_take_off();
    let t = target(Vec3::new(0.0, 2.0, 0.0), Vec3::Y, false);
    let expected_offset = camera.position - t.position;

    camera.update(DT, Some(&t), true);

    let follow = camera.follow_state();
    assert!(follow.offset_frozen);
    assert!((follow.frozen_offset - expected_offset).length() < 0.001);
}

#[test]
fn test_frozen_offset_holds_while_falling() {
    let mut camera = camera_after_take_off();
    camera.update(DT, Some(&target(Vec3::new(0.0, 2.0, 0.0), Vec3::Y, false)), true);
    let frozen = camera.follow_state().frozen_offset;

    // A second key press does not re-capture
    let moved = target(Vec3::new(5.0, 2.0, 0.0), Vec3::X, false);
    camera.update(DT, Some(&moved), true);
    assert_eq!(camera.follow_state().frozen_offset, frozen);

    // Desired position tracks the target with the frozen offset, ignoring
    // the target's rotation
    let mut spun = moved;
    spun.rotation = Quat::from_rotation_z(1.0);
    assert_eq!(camera.desired_position(&spun), moved.position + frozen);
}

#[test]
fn test_gravity_key_on_ground_does_not_freeze() {
    let mut camera = GravityCamera::default();
    camera.update(DT, Some(&target(Vec3::ZERO, Vec3::Y, true)), true);
    camera.update(DT, Some(&target(Vec3::ZERO, Vec3::Y, true)), true);
    assert!(!camera.follow_state().offset_frozen);
}

#[test]
fn test_landing_resets_freeze_and_realigns() {
    let mut camera = camera_after_take_off();
    camera.update(DT, Some(&target(Vec3::new(0.0, 2.0, 0.0), Vec3::Y, false)), true);
    assert!(camera.follow_state().offset_frozen);

    // Land on a wall whose surface-up is -X
    let landed = target(Vec3::new(9.5, 2.0, 0.0), Vec3::NEG_X, true);
    camera.update(DT, Some(&landed), false);

    let follow = camera.follow_state();
    assert!(!follow.offset_frozen);
    assert!(follow.was_grounded);
    assert!(same_rotation(
        follow.target_rotation,
        look_rotation(LOCAL_FORWARD, Vec3::NEG_X)
    ));
    // Camera up along the new surface-up
    assert!((follow.target_rotation * Vec3::Y - Vec3::NEG_X).length() < 0.001);
}

#[test]
fn test_target_rotation_only_changes_on_landing() {
    let mut camera = camera_after_take_off();
    let before = camera.follow_state().target_rotation;

    camera.update(DT, Some(&target(Vec3::ZERO, Vec3::X, false)), true);
    camera.update(DT, Some(&target(Vec3::ZERO, Vec3::NEG_Y, false)), false);
    assert_eq!(camera.follow_state().target_rotation, before);
}

// ============================================================================
// Smoothing
// ============================================================================

#[test]
fn test_position_eases_toward_desired() {
    let mut camera = GravityCamera::default();
    let t = target(Vec3::ZERO, Vec3::Y, true);
    let desired = camera.desired_position(&t);

    camera.update(DT, Some(&t), false);
    let first = camera.position;
    // Moved, but not snapped
    assert!(first.length() > 0.0);
    assert!((first - desired).length() > 0.1);

    for _ in 0..600 {
        camera.update(DT, Some(&t), false);
    }
    assert!((camera.position - desired).length() < 0.001);
}

#[test]
fn test_rotation_eases_toward_target() {
    let mut camera = camera_after_take_off();
    camera.update(DT, Some(&target(Vec3::ZERO, Vec3::NEG_Y, true)), false);
    let goal = camera.follow_state().target_rotation;
    assert!(!same_rotation(camera.rotation, goal));

    for _ in 0..600 {
        camera.update(DT, Some(&target(Vec3::ZERO, Vec3::NEG_Y, true)), false);
    }
    assert!(same_rotation(camera.rotation, goal));
}

#[test]
fn test_missing_target_skips_frame() {
    let mut camera = camera_after_take_off();
    let position = camera.position;
    let follow = *camera.follow_state();

    camera.update(DT, None, true);

    assert_eq!(camera.position, position);
    assert_eq!(*camera.follow_state(), follow);
}
