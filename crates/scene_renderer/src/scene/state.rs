//! Scene state shared by the frame renderer, the light animator and the input handlers

use crate::foundation::math::Vec3;
use crate::render::Camera;
use super::lights::{Attenuation, DirectionalLight, PointLight};

/// Direction the point light is currently sweeping along X
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepDirection {
    /// Moving towards +X
    #[default]
    Positive,
    /// Moving towards -X
    Negative,
}

impl SweepDirection {
    /// Sign applied to the step
    pub fn sign(self) -> f32 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// Mutable record of everything a frame reads
///
/// Constructed once by the application and passed by reference; there is no global
/// instance. Only the frame loop, the light animator and the input handlers mutate it.
/// It owns no GPU resources, so dropping it is the whole teardown.
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Fly camera
    pub camera: Camera,
    /// Framebuffer clear colour
    pub clear_color: Vec3,
    /// Whether cursor motion turns the camera
    pub mouse_look_enabled: bool,
    /// Current sweep direction of the point light
    pub sweep: SweepDirection,
    /// The single point light
    pub point_light: PointLight,
    /// The single directional light
    pub dir_light: DirectionalLight,
}

impl SceneState {
    /// Mouse sensitivity applied to the camera at startup
    pub const MOUSE_SENSITIVITY: f32 = 0.05;

    /// Create the scene with its startup lighting and camera
    pub fn new() -> Self {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.mouse_sensitivity = Self::MOUSE_SENSITIVITY;

        Self {
            camera,
            clear_color: Vec3::new(0.3, 0.5, 0.5),
            mouse_look_enabled: true,
            sweep: SweepDirection::Positive,
            point_light: PointLight::new(
                Vec3::new(-2.0, 2.0, -3.0),
                0.07,
                0.75,
                1.0,
                Attenuation::new(1.0, 0.09, 0.03),
            ),
            dir_light: DirectionalLight::new(Vec3::new(0.3, 0.3, -1.0), 0.1, 0.4, 0.5),
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
