use crate::error::ConvertError;
use image::{DynamicImage, RgbImage};

/// Convert to 8-bit RGB. Alpha is dropped, not composited.
pub fn apply(image: DynamicImage) -> Result<RgbImage, ConvertError> {
    Ok(image.to_rgb8())
}
