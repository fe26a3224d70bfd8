use image::{Rgb, RgbImage};
use serde::Serialize;

/// Pixel position: `x` is the column, `y` the row, origin top-left.
/// Serializes as an `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl Serialize for Coordinate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

/// A pixel is black when every channel is at or below `tolerance`.
/// A negative tolerance therefore classifies nothing as black.
pub fn is_black(pixel: &Rgb<u8>, tolerance: i32) -> bool {
    pixel.0.iter().all(|&channel| i32::from(channel) <= tolerance)
}

/// Coordinates of every non-black pixel, in row-major order
pub fn extract_coordinates(image: &RgbImage, tolerance: i32) -> Vec<Coordinate> {
    let (width, height) = image.dimensions();
    let mut coordinates = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if !is_black(image.get_pixel(x, y), tolerance) {
                coordinates.push(Coordinate::new(x, y));
            }
        }
    }

    coordinates
}
