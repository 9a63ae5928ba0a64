//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use glam::Vec3;
use gravity_cube_engine::config::GravityCubeConfig;
use gravity_cube_engine::feedback::RecordingFeedback;
use gravity_cube_engine::input::ScriptedInput;
use gravity_cube_engine::physics::{Aabb, LayerMask, SandboxBody, StaticCollider};
use gravity_cube_engine::player::GravityCube;

pub const DT: f32 = 0.02;

pub type TestCube = GravityCube<SandboxBody, ScriptedInput, RecordingFeedback>;

pub fn ground(min: Vec3, max: Vec3) -> StaticCollider {
    StaticCollider::new(Aabb::new(min, max), LayerMask::GROUND)
}

/// Floor whose top face is y = 0.
pub fn floor() -> StaticCollider {
    ground(Vec3::new(-50.0, -1.0, -50.0), Vec3::new(50.0, 0.0, 50.0))
}

/// Wall whose left face is x = 10.
pub fn right_wall() -> StaticCollider {
    ground(Vec3::new(10.0, -1.0, -50.0), Vec3::new(11.0, 50.0, 50.0))
}

/// Unit cube resting on the floor.
pub fn body_on_floor() -> SandboxBody {
    SandboxBody::unit_cube(Vec3::new(0.0, 0.5, 0.0)).with_collider(floor())
}

pub fn cube(body: SandboxBody) -> TestCube {
    GravityCube::new(
        body,
        ScriptedInput::new(),
        RecordingFeedback::new(),
        &GravityCubeConfig::default(),
    )
}

/// Agent that has already run one fixed tick on the floor.
pub fn grounded_cube() -> TestCube {
    let mut cube = cube(body_on_floor());
    cube.on_fixed_tick(DT);
    assert!(cube.is_grounded());
    cube
}
