//! 2D texture loading
//!
//! Turning a file into a GPU texture happens in two steps. [`describe_upload`] is pure: it
//! picks the pixel format from the channel count and fixes the sampling parameters.
//! [`load_texture`] decodes the file, describes it and hands it to the device.
//!
//! Load failures never abort the program. They are logged and produce
//! [`TextureHandle::INVALID`], which samples as black; there is no retry and no fallback
//! texture.

use std::path::Path;
use thiserror::Error;

use crate::assets::ImageData;
use super::device::{RenderDevice, TextureHandle};

/// Texture loading errors
#[derive(Error, Debug)]
pub enum TextureError {
    /// The file could not be read or decoded
    #[error("Texture failed to load at path {path}: {reason}")]
    Decode {
        /// Offending path
        path: String,
        /// Decoder message
        reason: String,
    },

    /// The image has a channel count with no matching pixel format
    #[error("Unsupported channel count {0}; expected 1, 3 or 4")]
    UnsupportedChannels(u8),

    /// Pixel buffer does not match the stated dimensions
    #[error("Pixel buffer of {actual} bytes does not match {width}x{height}x{channels}")]
    Dimensions {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
        /// Channels per pixel
        channels: u8,
        /// Actual buffer length
        actual: usize,
    },
}

/// Pixel formats a texture can be uploaded as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// One channel
    Red,
    /// Three channels
    Rgb,
    /// Four channels
    Rgba,
}

impl PixelFormat {
    /// Pick the format for a channel count
    ///
    /// Two-channel (luminance + alpha) images are rejected rather than guessed at.
    pub fn from_channels(channels: u8) -> Result<Self, TextureError> {
        match channels {
            1 => Ok(Self::Red),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(TextureError::UnsupportedChannels(other)),
        }
    }

    /// Bytes per pixel
    pub fn channels(self) -> u8 {
        match self {
            Self::Red => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Texture coordinate wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Tile the texture
    Repeat,
}

/// Texture filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Bilinear
    Linear,
    /// Trilinear across mip levels
    LinearMipmapLinear,
}

/// Sampling parameters applied at upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerParams {
    /// Wrap along S
    pub wrap_s: WrapMode,
    /// Wrap along T
    pub wrap_t: WrapMode,
    /// Minification filter
    pub min_filter: FilterMode,
    /// Magnification filter
    pub mag_filter: FilterMode,
    /// Generate the full mip chain after upload
    pub generate_mipmaps: bool,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            min_filter: FilterMode::LinearMipmapLinear,
            mag_filter: FilterMode::Linear,
            generate_mipmaps: true,
        }
    }
}

/// Everything a device needs to create a texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureUpload<'a> {
    /// Tightly packed 8-bit pixels
    pub pixels: &'a [u8],
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Internal and source pixel format
    pub format: PixelFormat,
    /// Sampling parameters
    pub sampler: SamplerParams,
}

/// Describe the upload for a decoded image
pub fn describe_upload(image: &ImageData) -> Result<TextureUpload<'_>, TextureError> {
    let format = PixelFormat::from_channels(image.channels)?;
    let expected = image.width as usize * image.height as usize * usize::from(format.channels());
    if image.data.len() != expected {
        return Err(TextureError::Dimensions {
            width: image.width,
            height: image.height,
            channels: image.channels,
            actual: image.data.len(),
        });
    }

    Ok(TextureUpload {
        pixels: &image.data,
        width: image.width,
        height: image.height,
        format,
        sampler: SamplerParams::default(),
    })
}

/// Decode `path` and upload it, returning the texture handle
///
/// Errors are reported and mapped to the invalid handle.
pub fn load_texture<D: RenderDevice + ?Sized>(device: &mut D, path: &Path) -> TextureHandle {
    match try_load_texture(device, path) {
        Ok(handle) => {
            log::debug!("Texture {:?} uploaded as {:?}", path, handle);
            handle
        }
        Err(e) => {
            log::error!("{}", e);
            TextureHandle::INVALID
        }
    }
}

/// Decode `path` and upload it, surfacing the failure to the caller
pub fn try_load_texture<D: RenderDevice + ?Sized>(
    device: &mut D,
    path: &Path,
) -> Result<TextureHandle, TextureError> {
    let image = ImageData::from_file(path).map_err(|e| TextureError::Decode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let upload = describe_upload(&image)?;
    Ok(device.create_texture(&upload))
}
