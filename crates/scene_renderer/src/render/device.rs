//! Render device contract
//!
//! The frame passes issue their GPU work through [`RenderDevice`]. The OpenGL backend in
//! [`super::gl`] implements it for real; tests use a recording double.

use crate::foundation::math::Vec3;
use super::geometry::GeometryData;
use super::texture::TextureUpload;

/// GPU texture name; [`TextureHandle::INVALID`] samples as black
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    /// The "no texture" name
    pub const INVALID: Self = Self(0);

    /// Whether this refers to an uploaded texture
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Uploaded vertex array with its buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle {
    /// Vertex array object
    pub vertex_array: u32,
    /// Vertex buffer
    pub vertex_buffer: u32,
    /// Index buffer, for indexed geometry
    pub index_buffer: Option<u32>,
}

/// GPU operations used by the frame passes
pub trait RenderDevice {
    /// Clear colour and depth; alpha is always 1
    fn clear(&mut self, color: &Vec3);

    /// Resize the viewport to the framebuffer
    fn set_viewport(&mut self, width: i32, height: i32);

    /// Upload static geometry
    fn create_geometry(&mut self, data: &GeometryData) -> GeometryHandle;

    /// Release geometry created by [`RenderDevice::create_geometry`]
    fn delete_geometry(&mut self, geometry: GeometryHandle);

    /// Upload a texture and return its handle
    fn create_texture(&mut self, upload: &TextureUpload<'_>) -> TextureHandle;

    /// Release a texture; invalid handles are ignored
    fn delete_texture(&mut self, texture: TextureHandle);

    /// Bind a 2D texture to a texture unit
    fn bind_texture(&mut self, unit: u32, texture: TextureHandle);

    /// Draw `vertex_count` vertices as triangles
    fn draw_arrays(&mut self, geometry: GeometryHandle, vertex_count: usize);

    /// Draw `index_count` indices as triangles
    fn draw_elements(&mut self, geometry: GeometryHandle, index_count: usize);
}
