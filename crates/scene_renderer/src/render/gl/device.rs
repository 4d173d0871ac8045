//! [`RenderDevice`] over a glow context

#![allow(unsafe_code)]

use std::mem::size_of;
use std::num::NonZeroU32;
use std::rc::Rc;

use glow::HasContext;

use crate::foundation::math::Vec3;
use crate::render::device::{GeometryHandle, RenderDevice, TextureHandle};
use crate::render::geometry::GeometryData;
use crate::render::texture::{FilterMode, PixelFormat, TextureUpload, WrapMode};

/// OpenGL device sharing the window's context
pub struct GlDevice {
    gl: Rc<glow::Context>,
}

impl GlDevice {
    /// Wrap the context and enable depth testing
    pub fn new(gl: Rc<glow::Context>) -> Self {
        unsafe {
            gl.enable(glow::DEPTH_TEST);
        }
        Self { gl }
    }

    fn vertex_array(name: u32) -> Option<glow::NativeVertexArray> {
        NonZeroU32::new(name).map(glow::NativeVertexArray)
    }

    fn buffer(name: u32) -> Option<glow::NativeBuffer> {
        NonZeroU32::new(name).map(glow::NativeBuffer)
    }

    fn texture(handle: TextureHandle) -> Option<glow::NativeTexture> {
        NonZeroU32::new(handle.0).map(glow::NativeTexture)
    }

    fn upload_buffer(&self, target: u32, data: &[u8]) -> u32 {
        unsafe {
            match self.gl.create_buffer() {
                Ok(buffer) => {
                    self.gl.bind_buffer(target, Some(buffer));
                    self.gl.buffer_data_u8_slice(target, data, glow::STATIC_DRAW);
                    buffer.0.get()
                }
                Err(e) => {
                    log::error!("Failed to create buffer: {}", e);
                    0
                }
            }
        }
    }
}

fn gl_format(format: PixelFormat) -> u32 {
    match format {
        PixelFormat::Red => glow::RED,
        PixelFormat::Rgb => glow::RGB,
        PixelFormat::Rgba => glow::RGBA,
    }
}

#[allow(clippy::cast_possible_wrap)]
fn gl_wrap(mode: WrapMode) -> i32 {
    let value = match mode {
        WrapMode::Repeat => glow::REPEAT,
    };
    value as i32
}

#[allow(clippy::cast_possible_wrap)]
fn gl_filter(mode: FilterMode) -> i32 {
    let value = match mode {
        FilterMode::Linear => glow::LINEAR,
        FilterMode::LinearMipmapLinear => glow::LINEAR_MIPMAP_LINEAR,
    };
    value as i32
}

fn gl_int(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl RenderDevice for GlDevice {
    fn clear(&mut self, color: &Vec3) {
        unsafe {
            self.gl.clear_color(color.x, color.y, color.z, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn set_viewport(&mut self, width: i32, height: i32) {
        log::debug!("Viewport resized to {}x{}", width, height);
        unsafe {
            self.gl.viewport(0, 0, width, height);
        }
    }

    fn create_geometry(&mut self, data: &GeometryData) -> GeometryHandle {
        let vertex_array = unsafe {
            match self.gl.create_vertex_array() {
                Ok(vao) => {
                    self.gl.bind_vertex_array(Some(vao));
                    vao.0.get()
                }
                Err(e) => {
                    log::error!("Failed to create vertex array: {}", e);
                    0
                }
            }
        };

        let vertex_buffer = self.upload_buffer(glow::ARRAY_BUFFER, bytemuck::cast_slice(&data.vertices));
        // The element buffer binding is recorded in the bound vertex array
        let index_buffer = data
            .indices
            .as_ref()
            .map(|indices| self.upload_buffer(glow::ELEMENT_ARRAY_BUFFER, bytemuck::cast_slice(indices)));

        let stride = gl_int(data.stride * size_of::<f32>());
        unsafe {
            for attribute in &data.attributes {
                self.gl.enable_vertex_attrib_array(attribute.location);
                self.gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    stride,
                    gl_int(attribute.offset * size_of::<f32>()),
                );
            }
            self.gl.bind_vertex_array(None);
        }

        log::debug!(
            "Uploaded geometry: {} vertices, {} indices (vao {})",
            data.vertex_count(),
            data.index_count(),
            vertex_array
        );

        GeometryHandle {
            vertex_array,
            vertex_buffer,
            index_buffer,
        }
    }

    fn delete_geometry(&mut self, geometry: GeometryHandle) {
        unsafe {
            if let Some(vao) = Self::vertex_array(geometry.vertex_array) {
                self.gl.delete_vertex_array(vao);
            }
            if let Some(buffer) = Self::buffer(geometry.vertex_buffer) {
                self.gl.delete_buffer(buffer);
            }
            if let Some(buffer) = geometry.index_buffer.and_then(Self::buffer) {
                self.gl.delete_buffer(buffer);
            }
        }
    }

    fn create_texture(&mut self, upload: &TextureUpload<'_>) -> TextureHandle {
        let format = gl_format(upload.format);
        let sampler = upload.sampler;

        unsafe {
            let texture = match self.gl.create_texture() {
                Ok(texture) => texture,
                Err(e) => {
                    log::error!("Failed to create texture: {}", e);
                    return TextureHandle::INVALID;
                }
            };

            self.gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            #[allow(clippy::cast_possible_wrap)]
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                format as i32,
                i32::try_from(upload.width).unwrap_or(i32::MAX),
                i32::try_from(upload.height).unwrap_or(i32::MAX),
                0,
                format,
                glow::UNSIGNED_BYTE,
                Some(upload.pixels),
            );
            if sampler.generate_mipmaps {
                self.gl.generate_mipmap(glow::TEXTURE_2D);
            }

            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, gl_wrap(sampler.wrap_s));
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, gl_wrap(sampler.wrap_t));
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, gl_filter(sampler.min_filter));
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, gl_filter(sampler.mag_filter));

            TextureHandle(texture.0.get())
        }
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        if let Some(texture) = Self::texture(texture) {
            unsafe {
                self.gl.delete_texture(texture);
            }
        }
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureHandle) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Self::texture(texture));
        }
    }

    fn draw_arrays(&mut self, geometry: GeometryHandle, vertex_count: usize) {
        unsafe {
            self.gl.bind_vertex_array(Self::vertex_array(geometry.vertex_array));
            self.gl.draw_arrays(glow::TRIANGLES, 0, gl_int(vertex_count));
        }
    }

    fn draw_elements(&mut self, geometry: GeometryHandle, index_count: usize) {
        unsafe {
            self.gl.bind_vertex_array(Self::vertex_array(geometry.vertex_array));
            self.gl.draw_elements(glow::TRIANGLES, gl_int(index_count), glow::UNSIGNED_INT, 0);
        }
    }
}
