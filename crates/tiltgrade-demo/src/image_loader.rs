//! Image loading for the demo application.

use std::path::Path;

use tiltgrade_core::{FilterImage, PipelineError};

/// Load an image from disk and convert to the internal `FilterImage` format.
///
/// The format is sniffed from the file contents, so extensions don't matter.
pub fn load_image(path: &Path) -> Result<FilterImage, ImageLoadError> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(ImageLoadError::Decode)?;
    Ok(FilterImage::from_dynamic(&img))
}

/// Write the displayed bitmap as an 8-bit PNG.
pub fn save_png(image: &FilterImage, path: &Path) -> Result<(), ImageLoadError> {
    image
        .to_rgba8()?
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(ImageLoadError::Encode)
}

/// Errors that can occur while reading or writing images.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("invalid bitmap: {0}")]
    Invalid(#[from] PipelineError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
