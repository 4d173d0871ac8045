//! Uniform blocks pushed by the lit passes
//!
//! The cube and the plant read the same lights from the same [`SceneState`], so both go
//! through [`apply_lighting`]. Values are copied verbatim; no normalisation or colour
//! conversion happens on the way to the shader.

use crate::foundation::math::Mat4;
use crate::scene::SceneState;
use super::shader::{uniforms, ShaderProgram};

/// Push model, view and projection matrices
pub fn apply_transforms<S: ShaderProgram + ?Sized>(
    shader: &mut S,
    model: &Mat4,
    view: &Mat4,
    projection: &Mat4,
) {
    shader.set_mat4(uniforms::MODEL, model);
    shader.set_mat4(uniforms::VIEW, view);
    shader.set_mat4(uniforms::PROJECTION, projection);
}

/// Push camera position, material shininess and every light field
pub fn apply_lighting<S: ShaderProgram + ?Sized>(shader: &mut S, state: &SceneState, shininess: f32) {
    shader.set_vec3(uniforms::VIEW_POS, &state.camera.position);
    shader.set_float(uniforms::MATERIAL_SHININESS, shininess);

    let dir = &state.dir_light;
    shader.set_vec3(uniforms::DIR_LIGHT_DIRECTION, &dir.direction);
    shader.set_vec3(uniforms::DIR_LIGHT_AMBIENT, &dir.ambient);
    shader.set_vec3(uniforms::DIR_LIGHT_DIFFUSE, &dir.diffuse);
    shader.set_vec3(uniforms::DIR_LIGHT_SPECULAR, &dir.specular);

    let point = &state.point_light;
    shader.set_vec3(uniforms::POINT_LIGHT_POSITION, &point.position);
    shader.set_vec3(uniforms::POINT_LIGHT_AMBIENT, &point.ambient);
    shader.set_vec3(uniforms::POINT_LIGHT_DIFFUSE, &point.diffuse);
    shader.set_vec3(uniforms::POINT_LIGHT_SPECULAR, &point.specular);
    shader.set_float(uniforms::POINT_LIGHT_CONSTANT, point.attenuation.constant);
    shader.set_float(uniforms::POINT_LIGHT_LINEAR, point.attenuation.linear);
    shader.set_float(uniforms::POINT_LIGHT_QUADRATIC, point.attenuation.quadratic);
}
