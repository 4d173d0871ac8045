//! Shader program contract
//!
//! The frame passes only ever talk to programs through named uniform setters. Setting a
//! uniform the program does not declare is a silent no-op, which is how OpenGL behaves
//! for location -1, so implementations must not fail on unknown names.

use crate::foundation::math::{Mat4, Vec3};
use thiserror::Error;

/// Shader build errors
///
/// All of these are fatal at startup.
#[derive(Error, Debug)]
pub enum ShaderError {
    /// Source file could not be read
    #[error("Failed to read shader source {path}: {source}")]
    Io {
        /// Offending path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Source contains an interior NUL byte
    #[error("Shader source {0} contains a NUL byte")]
    InvalidSource(String),

    /// A stage failed to compile
    #[error("{stage} shader compilation failed: {log}")]
    Compile {
        /// "vertex" or "fragment"
        stage: &'static str,
        /// Driver info log
        log: String,
    },

    /// Program failed to link
    #[error("Program linking failed: {0}")]
    Link(String),
}

/// Linked shader program with named uniform setters
pub trait ShaderProgram {
    /// Make this the current program; uniform setters target the current program
    fn activate(&mut self);

    /// Set an `int` (or sampler) uniform
    fn set_int(&mut self, name: &str, value: i32);

    /// Set a `float` uniform
    fn set_float(&mut self, name: &str, value: f32);

    /// Set a `vec3` uniform
    fn set_vec3(&mut self, name: &str, value: &Vec3);

    /// Set a `mat4` uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);
}

/// Uniform names shared between the Rust passes and the GLSL sources
pub mod uniforms {
    /// Model matrix
    pub const MODEL: &str = "model";
    /// View matrix
    pub const VIEW: &str = "view";
    /// Projection matrix
    pub const PROJECTION: &str = "projection";
    /// Camera position for specular highlights
    pub const VIEW_POS: &str = "viewPos";

    /// Specular exponent
    pub const MATERIAL_SHININESS: &str = "material.shininess";
    /// Diffuse sampler unit of the cube material
    pub const MATERIAL_DIFFUSE: &str = "material.diffuse";
    /// Specular sampler unit of the cube material
    pub const MATERIAL_SPECULAR: &str = "material.specular";

    /// Directional light direction
    pub const DIR_LIGHT_DIRECTION: &str = "dirLight.direction";
    /// Directional light ambient colour
    pub const DIR_LIGHT_AMBIENT: &str = "dirLight.ambient";
    /// Directional light diffuse colour
    pub const DIR_LIGHT_DIFFUSE: &str = "dirLight.diffuse";
    /// Directional light specular colour
    pub const DIR_LIGHT_SPECULAR: &str = "dirLight.specular";

    /// Point light position
    pub const POINT_LIGHT_POSITION: &str = "pointLight.position";
    /// Point light ambient colour
    pub const POINT_LIGHT_AMBIENT: &str = "pointLight.ambient";
    /// Point light diffuse colour
    pub const POINT_LIGHT_DIFFUSE: &str = "pointLight.diffuse";
    /// Point light specular colour
    pub const POINT_LIGHT_SPECULAR: &str = "pointLight.specular";
    /// Point light constant attenuation
    pub const POINT_LIGHT_CONSTANT: &str = "pointLight.constant";
    /// Point light linear attenuation
    pub const POINT_LIGHT_LINEAR: &str = "pointLight.linear";
    /// Point light quadratic attenuation
    pub const POINT_LIGHT_QUADRATIC: &str = "pointLight.quadratic";
}
