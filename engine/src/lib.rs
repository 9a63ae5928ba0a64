//! Gravity Cube Engine Library
//!
//! Movement and orientation controller for a gravity-switching cube
//! platformer. The agent can redirect "down" to one of four world axes while
//! airborne, walk on whichever surface currently faces down, and push off into
//! free fall. Physics, input, animation and audio/visual feedback sit behind
//! small traits so any host engine can drive the controller.
//!
//! # Modules
//!
//! - [`gravity`] - Gravity axis, derived vectors and the axis switch
//! - [`player`] - Ground probe, locomotion, orientation, animation driver and the agent
//! - [`camera`] - Follow camera with offset freezing during gravity switches
//! - [`input`] - Platform-agnostic keyboard edges, bindings and input sources
//! - [`physics`] - Body/raycast collaborator traits, math helpers and a sandbox body
//! - [`feedback`] - Fire-and-forget tint/audio/particle sinks
//! - [`config`] - JSON-loadable tuning
//! - [`scene`] - Fixed-step composition root
//!
//! # Example
//!
//! ```ignore
//! use gravity_cube_engine::config::GravityCubeConfig;
//! use gravity_cube_engine::feedback::LogFeedback;
//! use gravity_cube_engine::input::{KeyCode, KeyboardInput};
//! use gravity_cube_engine::physics::SandboxBody;
//! use gravity_cube_engine::player::LogAnimator;
//! use gravity_cube_engine::scene::GravityScene;
//!
//! let config = GravityCubeConfig::default();
//! let body = SandboxBody::unit_cube(glam::Vec3::new(0.0, 0.5, 0.0));
//! let mut scene = GravityScene::new(body, KeyboardInput::new(), LogFeedback, Some(LogAnimator), &config);
//!
//! // Host event loop
//! scene.agent.input_mut().handle_key(KeyCode::Space, true);
//! scene.update(1.0 / 60.0);
//! ```

pub mod camera;
pub mod config;
pub mod feedback;
pub mod gravity;
pub mod input;
pub mod physics;
pub mod player;
pub mod scene;

// Re-export the types most hosts touch
pub use camera::{CameraTarget, GravityCamera};
pub use config::{ConfigError, GravityCubeConfig};
pub use gravity::{GravityAxis, GravityState};
pub use input::{InputFrame, InputSource, KeyCode, KeyboardState};
pub use physics::{LayerMask, PhysicsBody};
pub use player::{GravityCube, GroundState};
pub use scene::GravityScene;
