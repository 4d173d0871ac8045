//! Point light sweep animation
//!
//! The point light slides back and forth along X between `-bound` and `bound`. The
//! boundary check runs before the step, so on the frame the light reaches or passes a
//! boundary it still moves outward once more; the flipped direction takes effect on the
//! following frame. The light can therefore overshoot a boundary by at most one step.

use crate::config::{AnimationConfig, AnimationMode};
use super::state::{SceneState, SweepDirection};

/// Policy that moves the point light once per frame
///
/// The renderer calls [`LightMotion::advance`] exactly once per frame and knows nothing
/// else about how the light moves.
pub trait LightMotion {
    /// Advance the point light; `delta_time` is the frame time in seconds
    fn advance(&self, state: &mut SceneState, delta_time: f32);
}

/// Apply the boundary check, then move `distance` along the current direction
fn sweep(state: &mut SceneState, bound: f32, distance: f32) {
    let x = state.point_light.position.x;
    if x >= bound {
        state.sweep = SweepDirection::Negative;
    }
    if x <= -bound {
        state.sweep = SweepDirection::Positive;
    }
    state.point_light.position.x += state.sweep.sign() * distance;
}

/// Fixed distance per frame, ignoring frame time
///
/// Sweep speed scales with frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepSweep {
    /// Distance moved per frame
    pub step: f32,
    /// Half-width of the sweep
    pub bound: f32,
}

impl FixedStepSweep {
    /// Create a fixed-step sweep
    pub const fn new(step: f32, bound: f32) -> Self {
        Self { step, bound }
    }
}

impl Default for FixedStepSweep {
    fn default() -> Self {
        Self::new(0.01, 3.0)
    }
}

impl LightMotion for FixedStepSweep {
    fn advance(&self, state: &mut SceneState, _delta_time: f32) {
        sweep(state, self.bound, self.step);
    }
}

/// Distance proportional to frame time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScaledSweep {
    /// Units per second
    pub speed: f32,
    /// Half-width of the sweep
    pub bound: f32,
}

impl TimeScaledSweep {
    /// Create a time-scaled sweep
    pub const fn new(speed: f32, bound: f32) -> Self {
        Self { speed, bound }
    }
}

impl LightMotion for TimeScaledSweep {
    fn advance(&self, state: &mut SceneState, delta_time: f32) {
        sweep(state, self.bound, self.speed * delta_time);
    }
}

/// Build the motion policy selected by configuration
pub fn motion_from_config(config: &AnimationConfig) -> Box<dyn LightMotion> {
    match config.mode {
        AnimationMode::FixedStep => Box::new(FixedStepSweep::new(config.step, config.bound)),
        AnimationMode::TimeScaled => Box::new(TimeScaledSweep::new(config.speed, config.bound)),
    }
}
