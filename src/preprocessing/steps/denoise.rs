use crate::error::ConvertError;
use image::{Rgb, RgbImage};

/// Summed per-channel difference a neighbor must exceed to count as "different"
const ISOLATION_THRESHOLD: u32 = 100;
/// Color written over isolated pixels
const REPLACEMENT: Rgb<u8> = Rgb([0, 0, 0]);

/// Remove isolated pixels.
/// An interior pixel that differs sharply from all four of its
/// up/down/left/right neighbors is replaced with black. Border pixels are
/// copied unchanged.
pub fn apply(image: RgbImage) -> Result<RgbImage, ConvertError> {
    let (cleaned, replaced) = clean_isolated_pixels(&image);
    tracing::debug!(replaced, "Cleaned isolated pixels");
    Ok(cleaned)
}

/// Returns the cleaned copy and the number of pixels replaced.
/// Neighbors are always read from `image`, never from the copy being written.
pub fn clean_isolated_pixels(image: &RgbImage) -> (RgbImage, usize) {
    let (width, height) = image.dimensions();
    let mut cleaned = image.clone();
    let mut replaced = 0;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let current = image.get_pixel(x, y);
            let neighbours = [
                image.get_pixel(x, y - 1),
                image.get_pixel(x, y + 1),
                image.get_pixel(x - 1, y),
                image.get_pixel(x + 1, y),
            ];

            let isolated = neighbours
                .iter()
                .all(|n| color_difference(current, n) > ISOLATION_THRESHOLD);

            if isolated {
                cleaned.put_pixel(x, y, REPLACEMENT);
                replaced += 1;
            }
        }
    }

    (cleaned, replaced)
}

/// Sum of absolute per-channel differences
fn color_difference(a: &Rgb<u8>, b: &Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&ca, &cb)| u32::from(ca.abs_diff(cb)))
        .sum()
}
