//! Image loading utilities for texture data
//!
//! Decodes PNG and JPEG files while keeping the source channel count, so a greyscale
//! image stays single-channel all the way to the GPU.

use std::path::Path;
use image::DynamicImage;
use super::AssetError;

/// Decoded 8-bit image data ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw pixel data, rows top to bottom, `channels` bytes per pixel
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of colour channels (1 to 4)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image {}: {}", path_ref.display(), e)))?;

        let data = Self::from_dynamic(img);
        log::info!(
            "Loaded image {}x{} ({} channels) from {:?}",
            data.width, data.height, data.channels, path_ref
        );
        Ok(data)
    }

    /// Convert a decoded image to 8 bits per channel, preserving the channel count
    ///
    /// 16-bit and floating point images are narrowed; their channel layout is kept.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let channels = img.color().channel_count();
        let data = match channels {
            1 => img.into_luma8().into_raw(),
            2 => img.into_luma_alpha8().into_raw(),
            3 => img.into_rgb8().into_raw(),
            _ => img.into_rgba8().into_raw(),
        };

        Self {
            data,
            width,
            height,
            channels: channels.min(4),
        }
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: &[u8]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * color.len());

        for _ in 0..pixel_count {
            data.extend_from_slice(color);
        }

        Self {
            data,
            width,
            height,
            channels: u8::try_from(color.len()).unwrap_or(u8::MAX),
        }
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgb, RgbImage, RgbaImage};

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 4, &[255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_channel_count_is_preserved() {
        let rgb = ImageData::from_dynamic(DynamicImage::ImageRgb8(RgbImage::new(2, 2)));
        assert_eq!(rgb.channels, 3);
        assert_eq!(rgb.size_bytes(), 2 * 2 * 3);

        let grey = ImageData::from_dynamic(DynamicImage::ImageLuma8(GrayImage::new(3, 1)));
        assert_eq!(grey.channels, 1);
        assert_eq!(grey.size_bytes(), 3);

        let rgba = ImageData::from_dynamic(DynamicImage::ImageRgba8(RgbaImage::new(1, 1)));
        assert_eq!(rgba.channels, 4);
    }

    #[test]
    fn test_png_file_round_trip() {
        let path = std::env::temp_dir().join("scene_renderer_image_loader.png");
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(1, 0, Rgb([10, 20, 30]));
        img.save(&path).unwrap();

        let loaded = ImageData::from_file(&path).unwrap();
        assert_eq!((loaded.width, loaded.height, loaded.channels), (2, 2, 3));
        assert_eq!(&loaded.data[3..6], &[10, 20, 30]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_nonexistent_file() {
        let result = ImageData::from_file("nonexistent_file.png");
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }
}
