//! GLSL program compilation and uniform upload

#![allow(unsafe_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use glow::HasContext;

use crate::foundation::math::{Mat4, Vec3};
use crate::render::shader::{ShaderError, ShaderProgram};

/// Linked GLSL program with RAII cleanup
///
/// Uniform locations are looked up once per name and cached. Names the program does not
/// declare resolve to `None` and setting them does nothing.
pub struct GlShaderProgram {
    gl: Rc<glow::Context>,
    program: glow::NativeProgram,
    locations: HashMap<String, Option<glow::NativeUniformLocation>>,
}

impl GlShaderProgram {
    /// Read, compile and link a vertex/fragment pair
    pub fn from_files(
        gl: Rc<glow::Context>,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> Result<Self, ShaderError> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| ShaderError::Io {
                path: path.display().to_string(),
                source,
            })
        };
        let vertex = read(vertex_path)?;
        let fragment = read(fragment_path)?;

        let program = Self::from_sources(gl, &vertex, &fragment)?;
        log::debug!("Built shader program from {:?} and {:?}", vertex_path, fragment_path);
        Ok(program)
    }

    /// Compile and link in-memory sources
    pub fn from_sources(gl: Rc<glow::Context>, vertex: &str, fragment: &str) -> Result<Self, ShaderError> {
        if vertex.contains('\0') {
            return Err(ShaderError::InvalidSource("vertex".to_string()));
        }
        if fragment.contains('\0') {
            return Err(ShaderError::InvalidSource("fragment".to_string()));
        }

        unsafe {
            let vertex = compile_stage(&gl, glow::VERTEX_SHADER, "vertex", vertex)?;
            let fragment = match compile_stage(&gl, glow::FRAGMENT_SHADER, "fragment", fragment) {
                Ok(fragment) => fragment,
                Err(e) => {
                    gl.delete_shader(vertex);
                    return Err(e);
                }
            };

            let program = gl.create_program().map_err(ShaderError::Link)?;
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);
            // Stages are no longer needed once linked
            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link(log));
            }

            Ok(Self {
                gl,
                program,
                locations: HashMap::new(),
            })
        }
    }

    fn location(&mut self, name: &str) -> Option<glow::NativeUniformLocation> {
        if let Some(location) = self.locations.get(name) {
            return location.clone();
        }
        let location = unsafe { self.gl.get_uniform_location(self.program, name) };
        if location.is_none() {
            log::trace!("Program has no uniform '{}'", name);
        }
        self.locations.insert(name.to_string(), location.clone());
        location
    }
}

impl ShaderProgram for GlShaderProgram {
    fn activate(&mut self) {
        unsafe {
            self.gl.use_program(Some(self.program));
        }
    }

    fn set_int(&mut self, name: &str, value: i32) {
        let location = self.location(name);
        unsafe {
            self.gl.uniform_1_i32(location.as_ref(), value);
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        let location = self.location(name);
        unsafe {
            self.gl.uniform_1_f32(location.as_ref(), value);
        }
    }

    fn set_vec3(&mut self, name: &str, value: &Vec3) {
        let location = self.location(name);
        unsafe {
            self.gl.uniform_3_f32(location.as_ref(), value.x, value.y, value.z);
        }
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        let location = self.location(name);
        // nalgebra stores column-major, as GL expects without transposing
        unsafe {
            self.gl.uniform_matrix_4_f32_slice(location.as_ref(), false, value.as_slice());
        }
    }
}

impl Drop for GlShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}

unsafe fn compile_stage(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::NativeShader, ShaderError> {
    let shader = gl
        .create_shader(kind)
        .map_err(|log| ShaderError::Compile { stage, log })?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.get_shader_compile_status(shader) {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        Err(ShaderError::Compile { stage, log })
    }
}
