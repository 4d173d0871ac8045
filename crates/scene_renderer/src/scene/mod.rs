//! Scene state and simulation
//!
//! Holds the lights, camera and flags the frame reads, plus the point light animation
//! that runs once per frame before any pass draws.

pub mod lights;
pub mod state;
pub mod animator;

pub use lights::{Attenuation, DirectionalLight, PointLight};
pub use state::{SceneState, SweepDirection};
pub use animator::{FixedStepSweep, LightMotion, TimeScaledSweep, motion_from_config};
