//! Image representation for the filter pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PipelineError;

/// Storage depth of the decoded source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BitDepth {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit floating point.
    F32,
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8 => write!(f, "8-bit"),
            Self::U16 => write!(f, "16-bit"),
            Self::F32 => write!(f, "32-bit float"),
        }
    }
}

/// Internal image representation. Always stored as RGBA f32.
///
/// Values stay in the source's encoded space: the filters operate without a
/// working colour space, and nothing is clamped until [`FilterImage::to_rgba8`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in RGBA f32 format, row-major.
    pub pixels: Vec<[f32; 4]>,
    /// Original bit depth of the source image.
    pub source_bit_depth: BitDepth,
}

impl FilterImage {
    /// Build an image filled with a single colour.
    pub fn solid(width: u32, height: u32, rgba: [f32; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba; width as usize * height as usize],
            source_bit_depth: BitDepth::F32,
        }
    }

    /// Convert a decoded image. 8- and 16-bit sources are normalized to `[0, 1]`.
    pub fn from_dynamic(img: &::image::DynamicImage) -> Self {
        let rgba = img.to_rgba32f();
        let (width, height) = rgba.dimensions();
        let pixels: Vec<[f32; 4]> = bytemuck::cast_slice(rgba.as_raw().as_slice()).to_vec();

        let source_bit_depth = match img.color() {
            ::image::ColorType::Rgb16
            | ::image::ColorType::Rgba16
            | ::image::ColorType::L16
            | ::image::ColorType::La16 => BitDepth::U16,
            ::image::ColorType::Rgb32F | ::image::ColorType::Rgba32F => BitDepth::F32,
            _ => BitDepth::U8,
        };

        Self {
            width,
            height,
            pixels,
            source_bit_depth,
        }
    }

    /// Number of pixels implied by the dimensions.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that the image has pixels and that the buffer matches its extent.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let expected = self.pixel_count();
        if expected == 0 {
            return Err(PipelineError::EmptyImage);
        }
        if self.pixels.len() != expected {
            return Err(PipelineError::DimensionMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Quantize to a displayable 8-bit bitmap, clamping every channel to `[0, 1]`.
    pub fn to_rgba8(&self) -> Result<::image::RgbaImage, PipelineError> {
        self.validate()?;

        let quantized: Vec<[u8; 4]> = self
            .pixels
            .iter()
            .map(|p| p.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
            .collect();
        let raw: Vec<u8> = bytemuck::cast_slice(quantized.as_slice()).to_vec();

        let expected = self.pixel_count();
        ::image::RgbaImage::from_raw(self.width, self.height, raw).ok_or(
            PipelineError::DimensionMismatch {
                expected,
                actual: self.pixels.len(),
            },
        )
    }
}
