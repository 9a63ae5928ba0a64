//! Agent Tests - Gravity Switching, Ground Probing and Push-Off
//!
//! Drives `GravityCube` end to end with the sandbox body, scripted input and
//! recording feedback.

mod common;

use common::{DT, body_on_floor, cube, grounded_cube, right_wall};
use glam::{Vec2, Vec3};
use gravity_cube_engine::config::GravityCubeConfig;
use gravity_cube_engine::feedback::{FeedbackPalette, RecordingFeedback};
use gravity_cube_engine::gravity::GravityAxis;
use gravity_cube_engine::input::{InputFrame, InputSource, KeyCode, KeyboardInput};
use gravity_cube_engine::physics::{PhysicsBody, PhysicsStep, SandboxBody};
use gravity_cube_engine::player::{GRAVITY_GIZMO_LENGTH, GravityCube, GroundTransition};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_agent_starts_down_with_silent_tint() {
    let cube = cube(body_on_floor());

    assert_eq!(cube.axis(), GravityAxis::Down);
    assert_eq!(cube.gravity_state().surface_up(), Vec3::Y);

    let events = &cube.feedback().gravity_events;
    assert_eq!(events.len(), 1);
    assert!(!events[0].play_sfx);
    assert_eq!(events[0].tint, FeedbackPalette::default().color_down);
}

#[test]
fn test_new_agent_is_falling_until_first_probe() {
    let mut cube = cube(body_on_floor());
    assert!(cube.is_falling());

    let report = cube.on_fixed_tick(DT);
    assert_eq!(report.transition, GroundTransition::Landed);
    assert!(cube.is_grounded());
}

// ============================================================================
// Gravity model
// ============================================================================

#[test]
fn test_set_gravity_antiparallel_for_every_axis() {
    let mut cube = cube(body_on_floor());
    let magnitude = cube.params().gravity_magnitude;

    for axis in GravityAxis::ALL {
        cube.set_gravity(axis);
        let state = *cube.gravity_state();

        assert_eq!(state.surface_up(), -axis.direction());
        assert!((state.surface_up().dot(state.gravity_vector()) + magnitude).abs() < 1e-4);
        assert!((state.surface_up().length() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_redundant_set_gravity_replays_feedback() {
    let mut cube = cube(body_on_floor());
    cube.set_gravity(GravityAxis::Down);
    cube.set_gravity(GravityAxis::Down);

    assert_eq!(cube.feedback().gravity_events.len(), 3);
    assert_eq!(cube.feedback().audible_gravity_cues(), 2);
}

#[test]
fn test_switch_is_noop_while_grounded() {
    let mut cube = grounded_cube();
    let before = *cube.gravity_state();
    let events_before = cube.feedback().gravity_events.len();

    assert!(!cube.switch_gravity(GravityAxis::Left));

    assert_eq!(*cube.gravity_state(), before);
    assert_eq!(cube.feedback().gravity_events.len(), events_before);
}

#[test]
fn test_switch_mid_fall_redirects_next_probe() {
    let body = SandboxBody::unit_cube(Vec3::new(9.5, 5.0, 0.0))
        .with_collider(common::floor())
        .with_collider(right_wall());
    let mut cube = cube(body);

    cube.on_fixed_tick(DT);
    assert!(cube.is_falling());
    assert_eq!(cube.gravity_state().surface_up(), Vec3::Y);

    assert!(cube.switch_gravity(GravityAxis::Right));
    assert_eq!(cube.gravity_state().surface_up(), Vec3::NEG_X);
    assert_eq!(cube.gravity_state().down(), Vec3::X);

    // The very next probe casts toward the wall
    let report = cube.on_fixed_tick(DT);
    assert_eq!(report.transition, GroundTransition::Landed);
    let contact = cube.ground_state().last_contact().expect("wall contact");
    assert!((contact.point.x - 10.0).abs() < 0.001);
    assert_eq!(contact.normal, Vec3::NEG_X);
}

#[test]
fn test_gravity_key_switches_only_when_falling() {
    let mut cube = grounded_cube();
    cube.input_mut()
        .push(InputFrame::default().with_gravity(GravityAxis::Up));
    cube.on_variable_tick(DT);
    assert_eq!(cube.axis(), GravityAxis::Down);

    // Airborne: the same key now switches
    cube.body_mut().set_position(Vec3::new(0.0, 5.0, 0.0));
    cube.on_fixed_tick(DT);
    cube.input_mut()
        .push(InputFrame::default().with_gravity(GravityAxis::Up));
    cube.on_variable_tick(DT);
    assert_eq!(cube.axis(), GravityAxis::Up);
    assert!(cube.feedback().gravity_events.last().expect("event").play_sfx);
}

#[test]
fn test_simultaneous_gravity_keys_use_priority() {
    let body = SandboxBody::unit_cube(Vec3::new(0.0, 5.0, 0.0));
    let mut cube = cube(body);
    cube.on_fixed_tick(DT);

    cube.input_mut().push(
        InputFrame::default()
            .with_gravity(GravityAxis::Left)
            .with_gravity(GravityAxis::Right),
    );
    cube.on_variable_tick(DT);

    assert_eq!(cube.axis(), GravityAxis::Right);
    // One switch, one audible cue
    assert_eq!(cube.feedback().audible_gravity_cues(), 1);
}

// ============================================================================
// Push-off
// ============================================================================

#[test]
fn test_push_off_scenario() {
    let mut cube = grounded_cube();
    let velocity_before = cube.body().linear_velocity();

    cube.input_mut().push(InputFrame::default().with_jump());
    cube.on_variable_tick(DT);

    let velocity = cube.body().linear_velocity();
    assert!((velocity.y - velocity_before.y - 6.0).abs() < 0.001);
    assert!(!cube.is_grounded());
    assert!(cube.is_falling());

    let pushes = &cube.feedback().push_events;
    assert_eq!(pushes.len(), 1);
    assert!((pushes[0].position - Vec3::new(0.0, 0.02, 0.0)).length() < 0.001);
}

#[test]
fn test_push_off_single_fire_while_key_held() {
    let config = GravityCubeConfig::default();
    let mut cube = GravityCube::new(
        body_on_floor(),
        KeyboardInput::new(),
        RecordingFeedback::new(),
        &config,
    );
    cube.on_fixed_tick(DT);
    assert!(cube.is_grounded());

    cube.input_mut().handle_key(KeyCode::Space, true);
    for _ in 0..5 {
        cube.on_variable_tick(DT);
        // Body never stepped: the probe skips one tick, then finds the floor again
        cube.on_fixed_tick(DT);
    }

    assert_eq!(cube.feedback().push_events.len(), 1);
    assert!((cube.body().linear_velocity().y - 6.0).abs() < 0.001);
}

#[test]
fn test_push_off_rejected_in_air() {
    let mut cube = cube(SandboxBody::unit_cube(Vec3::new(0.0, 5.0, 0.0)));
    cube.on_fixed_tick(DT);

    assert!(!cube.push_off());
    assert!(cube.feedback().push_events.is_empty());
    assert_eq!(cube.body().linear_velocity(), Vec3::ZERO);
}

#[test]
fn test_push_off_transition_is_optimistic() {
    let mut cube = grounded_cube();
    assert!(cube.push_off());
    assert!(cube.is_falling());

    // Same order as the scene: fixed tick, then the physics step. The first
    // tick still has the body on the floor and must not report a landing.
    for _ in 0..10 {
        assert_eq!(cube.on_fixed_tick(DT).transition, GroundTransition::None);
        assert!(cube.is_falling());
        cube.body_mut().step(DT);
    }
    assert!(cube.body().position().y > 0.6);
    // Sticky contact survives the misses
    assert!(cube.ground_state().last_contact().is_some());
}

#[test]
fn test_gravity_switch_allowed_right_after_push_off() {
    let mut cube = grounded_cube();
    cube.input_mut().push(InputFrame::default().with_jump());
    cube.on_variable_tick(DT);

    // Fixed tick before the body has moved
    cube.on_fixed_tick(DT);
    cube.body_mut().step(DT);

    cube.input_mut()
        .push(InputFrame::default().with_gravity(GravityAxis::Right));
    cube.on_variable_tick(DT);
    assert_eq!(cube.axis(), GravityAxis::Right);
}

// ============================================================================
// Locomotion through the agent
// ============================================================================

#[test]
fn test_lateral_speed_never_exceeds_ground_cap() {
    let mut cube = grounded_cube();
    let max = cube.params().max_speed_ground;

    for _ in 0..200 {
        cube.input_mut().push(InputFrame::moving(Vec2::new(1.0, 1.0)));
        cube.on_variable_tick(DT);
        cube.on_fixed_tick(DT);
        cube.body_mut().step(DT);

        let v = cube.body().linear_velocity();
        let lateral = Vec3::new(v.x, 0.0, v.z).length();
        assert!(lateral <= max + 1e-3, "lateral speed {lateral} over cap");
    }

    let v = cube.body().linear_velocity();
    assert!((Vec3::new(v.x, 0.0, v.z).length() - max).abs() < 0.01);
}

#[test]
fn test_no_input_decelerates_to_rest() {
    let mut cube = grounded_cube();
    cube.body_mut().set_linear_velocity(Vec3::new(5.0, 0.0, 0.0));

    for _ in 0..20 {
        cube.on_variable_tick(DT);
        cube.on_fixed_tick(DT);
        cube.body_mut().step(DT);
    }

    assert!(cube.body().linear_velocity().x.abs() < 0.001);
}

// ============================================================================
// Orientation, camera target and gizmos
// ============================================================================

#[test]
fn test_body_tilts_toward_new_surface() {
    let mut cube = cube(SandboxBody::unit_cube(Vec3::new(0.0, 5.0, 0.0)));
    cube.on_fixed_tick(DT);
    cube.switch_gravity(GravityAxis::Left);

    for _ in 0..60 {
        cube.on_variable_tick(1.0 / 60.0);
    }

    assert!((cube.body().up() - Vec3::X).length() < 0.001);
    assert_eq!(cube.camera_target().surface_up, Vec3::X);
}

#[test]
fn test_debug_gizmos_follow_gravity() {
    let mut cube = cube(SandboxBody::unit_cube(Vec3::new(0.0, 5.0, 0.0)));
    cube.on_fixed_tick(DT);
    cube.switch_gravity(GravityAxis::Up);

    let [gravity_line, up_line] = cube.debug_gizmos();
    assert_eq!(gravity_line.start, Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(gravity_line.end, Vec3::new(0.0, 5.0 + GRAVITY_GIZMO_LENGTH, 0.0));
    assert_eq!(up_line.end, Vec3::new(0.0, 4.0, 0.0));
}

#[test]
fn test_scripted_input_is_consumed_per_variable_tick() {
    let mut cube = grounded_cube();
    cube.input_mut().push(InputFrame::moving(Vec2::Y));

    assert_eq!(cube.on_variable_tick(DT).move_axes, Vec2::Y);
    assert_eq!(cube.on_variable_tick(DT).move_axes, Vec2::ZERO);
    assert_eq!(cube.input_mut().sample(), InputFrame::default());
}
