use crate::error::Result;
use image::{self, RgbImage};
use std::path::Path;

/// Decodes any supported image format into an 8-bit RGB buffer.
pub fn read_image_as_rgb8(filepath: &Path) -> Result<RgbImage> {
    Ok(image::open(filepath)?.into_rgb8())
}
