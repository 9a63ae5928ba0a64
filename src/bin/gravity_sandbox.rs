//! Gravity Sandbox - headless scripted run
//!
//! Run with: `cargo run --bin gravity_sandbox [config.json]`
//!
//! Builds a floor, a wall on the right and a ceiling, then replays a keyboard
//! script through the full controller:
//! - D: walk right
//! - Space: push off the floor, E: gravity right, land on the wall
//! - W: walk along the wall
//! - Space: push off the wall, R: gravity up, land on the ceiling
//!
//! Set `RUST_LOG=debug` (or `trace`) for per-tick detail.

use glam::Vec3;

use gravity_cube_engine::config::GravityCubeConfig;
use gravity_cube_engine::feedback::LogFeedback;
use gravity_cube_engine::input::{KeyCode, KeyboardInput};
use gravity_cube_engine::physics::{Aabb, LayerMask, SandboxBody, StaticCollider};
use gravity_cube_engine::player::LogAnimator;
use gravity_cube_engine::scene::GravityScene;

const FRAME_DT: f32 = 1.0 / 60.0;
const TOTAL_FRAMES: u32 = 420;

/// (frame, key, pressed)
const SCRIPT: &[(u32, KeyCode, bool)] = &[
    (0, KeyCode::D, true),
    (30, KeyCode::Space, true),
    (31, KeyCode::Space, false),
    (36, KeyCode::D, false),
    (36, KeyCode::E, true),
    (37, KeyCode::E, false),
    (120, KeyCode::W, true),
    (160, KeyCode::W, false),
    (180, KeyCode::Space, true),
    (181, KeyCode::Space, false),
    (190, KeyCode::R, true),
    (191, KeyCode::R, false),
];

fn build_arena() -> SandboxBody {
    let ground = |min: Vec3, max: Vec3| StaticCollider::new(Aabb::new(min, max), LayerMask::GROUND);

    SandboxBody::unit_cube(Vec3::new(0.0, 0.5, 0.0))
        // Floor
        .with_collider(ground(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0)))
        // Right wall
        .with_collider(ground(Vec3::new(10.0, -1.0, -10.0), Vec3::new(11.0, 9.0, 10.0)))
        // Ceiling
        .with_collider(ground(Vec3::new(-10.0, 8.0, -10.0), Vec3::new(10.0, 9.0, 10.0)))
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match GravityCubeConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(e) => {
                log::error!("Failed to load config {path}: {e}");
                std::process::exit(1);
            }
        },
        None => GravityCubeConfig::default(),
    };

    let mut scene = GravityScene::new(
        build_arena(),
        KeyboardInput::new(),
        LogFeedback,
        Some(LogAnimator),
        &config,
    );

    log::info!("Starting gravity sandbox ({TOTAL_FRAMES} frames)");

    let mut landings = 0;
    let mut take_offs = 0;
    let mut surfaces = vec![scene.agent.axis()];

    for frame in 0..TOTAL_FRAMES {
        for &(_, key, pressed) in SCRIPT.iter().filter(|(f, _, _)| *f == frame) {
            scene.agent.input_mut().handle_key(key, pressed);
        }

        let report = scene.update(FRAME_DT);
        if report.landed {
            landings += 1;
            let axis = scene.agent.axis();
            surfaces.push(axis);
            log::info!(
                "frame {frame}: landed on {axis} surface at {:?}",
                scene.agent.body().bounds().center()
            );
        }
        if report.left_ground {
            take_offs += 1;
        }

        if log::log_enabled!(log::Level::Debug) {
            for line in scene.agent.debug_gizmos() {
                log::debug!("gizmo {:?} -> {:?}", line.start, line.end);
            }
        }
    }

    let target = scene.agent.camera_target();
    log::info!("Run complete: {landings} landings, {take_offs} take-offs, surfaces {surfaces:?}");
    log::info!(
        "Final: gravity {}, grounded {}, position {:?}, camera {:?}",
        scene.agent.axis(),
        target.is_grounded,
        target.position,
        scene.camera.position
    );
}
