//! GravityScene - composition root for one gravity cube.
//!
//! Owns the agent, its follow camera and its animation driver, and runs them
//! at the right cadence. [`update`](GravityScene::update) is the single
//! per-frame entry point:
//!
//! 1. Fixed steps from the accumulator: `agent.on_fixed_tick` then the body's
//!    physics step
//! 2. `agent.on_variable_tick` (input, push-off, gravity switch, tilt)
//! 3. Animation driver
//! 4. Camera late update

use crate::camera::GravityCamera;
use crate::config::{GravityCubeConfig, SimulationConfig};
use crate::feedback::FeedbackSink;
use crate::input::{InputFrame, InputSource};
use crate::physics::{PhysicsBody, PhysicsStep};
use crate::player::{AnimationDriver, Animator, GravityCube, GroundTransition};

/// Longest frame the scene will simulate.
const MAX_FRAME_DELTA_S: f32 = 0.1;

/// Fixed-timestep accumulator.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedStepClock {
    pub fn new(step: f32, max_steps: u32) -> Self {
        Self {
            step: step.max(f32::EPSILON),
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.fixed_timestep, config.max_fixed_steps)
    }

    /// Fixed step length in seconds.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time carried over to the next frame.
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Add frame time and return how many fixed steps to run now.
    ///
    /// Time beyond `max_steps` worth of steps is dropped.
    pub fn advance(&mut self, delta: f32) -> u32 {
        let budget = self.step * self.max_steps as f32;
        let total = self.accumulator + delta.max(0.0);
        if total > budget {
            log::warn!(
                "[FixedStepClock] dropping {:.3}s of simulation time (frame too long)",
                total - budget
            );
        }
        self.accumulator = total.min(budget);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }
}

/// Summary of one scene update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub fixed_steps: u32,
    pub landed: bool,
    pub left_ground: bool,
    pub input: InputFrame,
}

/// Agent, camera and animation driven together.
pub struct GravityScene<B, I, F, A>
where
    B: PhysicsBody + PhysicsStep,
    I: InputSource,
    F: FeedbackSink,
    A: Animator,
{
    pub agent: GravityCube<B, I, F>,
    pub camera: GravityCamera,
    pub animation: AnimationDriver<A>,
    clock: FixedStepClock,
}

impl<B, I, F, A> GravityScene<B, I, F, A>
where
    B: PhysicsBody + PhysicsStep,
    I: InputSource,
    F: FeedbackSink,
    A: Animator,
{
    /// Create a scene with the camera placed behind the agent.
    pub fn new(body: B, input: I, feedback: F, animator: Option<A>, config: &GravityCubeConfig) -> Self {
        let agent = GravityCube::new(body, input, feedback, config);
        let camera = GravityCamera::behind(config.camera, &agent.camera_target());
        let mut animation = AnimationDriver::new(config.animation, config.ground_mask);
        animation.set_animator(animator);

        Self {
            agent,
            camera,
            animation,
            clock: FixedStepClock::from_config(&config.simulation),
        }
    }

    pub fn clock(&self) -> &FixedStepClock {
        &self.clock
    }

    /// Main per-frame update.
    pub fn update(&mut self, delta: f32) -> FrameReport {
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA_S);
        let steps = self.clock.advance(delta);
        let step = self.clock.step();

        let mut landed = false;
        let mut left_ground = false;
        for _ in 0..steps {
            let report = self.agent.on_fixed_tick(step);
            match report.transition {
                GroundTransition::Landed => landed = true,
                GroundTransition::LeftGround => left_ground = true,
                GroundTransition::None => {}
            }
            self.agent.body_mut().step(step);
        }

        let input = self.agent.on_variable_tick(delta);

        self.animation.update(
            delta,
            Some(self.agent.body()),
            self.agent.ground_state(),
            input.move_axes,
        );

        let target = self.agent.camera_target();
        self.camera
            .update(delta, Some(&target), input.any_gravity_pressed());

        FrameReport {
            fixed_steps: steps,
            landed,
            left_ground,
            input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_runs_whole_steps() {
        let mut clock = FixedStepClock::new(0.02, 8);
        assert_eq!(clock.advance(0.05), 2);
        assert!((clock.accumulator() - 0.01).abs() < 1e-5);
        assert_eq!(clock.advance(0.01), 1);
    }

    #[test]
    fn test_clock_caps_steps() {
        let mut clock = FixedStepClock::new(0.02, 4);
        assert_eq!(clock.advance(1.0), 4);
        assert!(clock.accumulator() < 0.02);
    }

    #[test]
    fn test_clock_ignores_negative_time() {
        let mut clock = FixedStepClock::new(0.02, 8);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.accumulator(), 0.0);
    }
}
