//! Light descriptors for the forward lighting model
//!
//! Both lights use the classic Phong split into ambient, diffuse and specular colour
//! terms. Colours are linear RGB and are not clamped; values above one simply brighten
//! the result in the shader.

use crate::foundation::math::Vec3;

/// Parallel light with no position, like sunlight
///
/// Immutable once the scene is initialised and read by every lit pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels; not required to be normalised
    pub direction: Vec3,
    /// Ambient colour
    pub ambient: Vec3,
    /// Diffuse colour
    pub diffuse: Vec3,
    /// Specular colour
    pub specular: Vec3,
}

impl DirectionalLight {
    /// Create a directional light with grey ambient/diffuse/specular intensities
    pub fn new(direction: Vec3, ambient: f32, diffuse: f32, specular: f32) -> Self {
        Self {
            direction,
            ambient: Vec3::repeat(ambient),
            diffuse: Vec3::repeat(diffuse),
            specular: Vec3::repeat(specular),
        }
    }
}

/// Distance attenuation coefficients for a point light
///
/// `attenuation(d) = 1 / (constant + linear * d + quadratic * d²)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    /// Constant term, normally 1.0 so the light never brightens past its colour
    pub constant: f32,
    /// Linear term
    pub linear: f32,
    /// Quadratic term
    pub quadratic: f32,
}

impl Attenuation {
    /// Create attenuation coefficients
    pub const fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self { constant, linear, quadratic }
    }

    /// Attenuation factor at `distance` from the light
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

/// Omnidirectional light at a world-space position
///
/// Only `position` changes after initialisation; the light animator owns that mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,
    /// Ambient colour
    pub ambient: Vec3,
    /// Diffuse colour
    pub diffuse: Vec3,
    /// Specular colour
    pub specular: Vec3,
    /// Distance falloff
    pub attenuation: Attenuation,
}

impl PointLight {
    /// Create a point light with grey ambient/diffuse/specular intensities
    pub fn new(
        position: Vec3,
        ambient: f32,
        diffuse: f32,
        specular: f32,
        attenuation: Attenuation,
    ) -> Self {
        Self {
            position,
            ambient: Vec3::repeat(ambient),
            diffuse: Vec3::repeat(diffuse),
            specular: Vec3::repeat(specular),
            attenuation,
        }
    }

    /// Attenuation factor for a surface point
    pub fn attenuation_at(&self, point: &Vec3) -> f32 {
        self.attenuation.factor((point - self.position).norm())
    }
}
