//! Recording doubles for the device and shader seams

use std::collections::HashMap;

use crate::foundation::math::{Mat4, Vec3};
use crate::render::device::{GeometryHandle, RenderDevice, TextureHandle};
use crate::render::geometry::GeometryData;
use crate::render::shader::ShaderProgram;
use crate::render::texture::{PixelFormat, SamplerParams, TextureUpload};

/// A value pushed to a uniform
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Mat4(Mat4),
}

/// Shader double keeping the latest value per uniform
#[derive(Debug, Default)]
pub struct RecordingShader {
    pub values: HashMap<String, UniformValue>,
    pub activations: usize,
    /// Uniform names in the order they were set
    pub order: Vec<String>,
}

impl RecordingShader {
    pub fn int(&self, name: &str) -> Option<i32> {
        match self.values.get(name) {
            Some(UniformValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(UniformValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn vec3(&self, name: &str) -> Option<Vec3> {
        match self.values.get(name) {
            Some(UniformValue::Vec3(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn mat4(&self, name: &str) -> Option<Mat4> {
        match self.values.get(name) {
            Some(UniformValue::Mat4(v)) => Some(*v),
            _ => None,
        }
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        self.order.push(name.to_string());
        self.values.insert(name.to_string(), value);
    }
}

impl ShaderProgram for RecordingShader {
    fn activate(&mut self) {
        self.activations += 1;
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_vec3(&mut self, name: &str, value: &Vec3) {
        self.record(name, UniformValue::Vec3(*value));
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.record(name, UniformValue::Mat4(*value));
    }
}

/// Owned copy of a texture upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
    pub sampler: SamplerParams,
    pub byte_len: usize,
}

/// One device operation, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    Clear(Vec3),
    Viewport(i32, i32),
    CreateGeometry(GeometryHandle),
    DeleteGeometry(GeometryHandle),
    CreateTexture(TextureHandle),
    DeleteTexture(TextureHandle),
    BindTexture(u32, TextureHandle),
    DrawArrays(GeometryHandle, usize),
    DrawElements(GeometryHandle, usize),
}

/// Device double handing out sequential names
#[derive(Debug, Default)]
pub struct RecordingDevice {
    pub calls: Vec<DeviceCall>,
    pub uploads: Vec<RecordedUpload>,
    pub geometry: Vec<GeometryData>,
    next_name: u32,
}

impl RecordingDevice {
    fn next_name(&mut self) -> u32 {
        self.next_name += 1;
        self.next_name
    }

    /// Draw calls only, in order
    pub fn draws(&self) -> Vec<DeviceCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DeviceCall::DrawArrays(..) | DeviceCall::DrawElements(..)))
            .cloned()
            .collect()
    }
}

impl RenderDevice for RecordingDevice {
    fn clear(&mut self, color: &Vec3) {
        self.calls.push(DeviceCall::Clear(*color));
    }

    fn set_viewport(&mut self, width: i32, height: i32) {
        self.calls.push(DeviceCall::Viewport(width, height));
    }

    fn create_geometry(&mut self, data: &GeometryData) -> GeometryHandle {
        let handle = GeometryHandle {
            vertex_array: self.next_name(),
            vertex_buffer: self.next_name(),
            index_buffer: data.indices.as_ref().map(|_| self.next_name()),
        };
        self.geometry.push(data.clone());
        self.calls.push(DeviceCall::CreateGeometry(handle));
        handle
    }

    fn delete_geometry(&mut self, geometry: GeometryHandle) {
        self.calls.push(DeviceCall::DeleteGeometry(geometry));
    }

    fn create_texture(&mut self, upload: &TextureUpload<'_>) -> TextureHandle {
        let handle = TextureHandle(self.next_name());
        self.uploads.push(RecordedUpload {
            format: upload.format,
            width: upload.width,
            height: upload.height,
            sampler: upload.sampler,
            byte_len: upload.pixels.len(),
        });
        self.calls.push(DeviceCall::CreateTexture(handle));
        handle
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        self.calls.push(DeviceCall::DeleteTexture(texture));
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureHandle) {
        self.calls.push(DeviceCall::BindTexture(unit, texture));
    }

    fn draw_arrays(&mut self, geometry: GeometryHandle, vertex_count: usize) {
        self.calls.push(DeviceCall::DrawArrays(geometry, vertex_count));
    }

    fn draw_elements(&mut self, geometry: GeometryHandle, index_count: usize) {
        self.calls.push(DeviceCall::DrawElements(geometry, index_count));
    }
}
