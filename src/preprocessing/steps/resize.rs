use crate::error::ConvertError;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// How the target dimensions are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// Resize to exactly width x height, distorting the aspect ratio as needed
    Exact,
    /// Shrink to fit within width x height, preserving the aspect ratio.
    /// Images that already fit are left alone.
    Fit,
}

impl ResizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fit => "fit",
        }
    }
}

/// Resize with nearest-neighbor sampling so pixel values are never blended
pub fn apply(
    image: DynamicImage,
    width: u32,
    height: u32,
    mode: ResizeMode,
) -> Result<DynamicImage, ConvertError> {
    let (current_width, current_height) = image.dimensions();

    if (current_width, current_height) == (width, height) {
        return Ok(image);
    }

    match mode {
        ResizeMode::Exact => Ok(image.resize_exact(width, height, FilterType::Nearest)),
        ResizeMode::Fit => {
            if current_width <= width && current_height <= height {
                return Ok(image);
            }
            let (fit_width, fit_height) =
                fit_dimensions(current_width, current_height, width, height);
            if (fit_width, fit_height) == (current_width, current_height) {
                return Ok(image);
            }
            Ok(image.resize_exact(fit_width, fit_height, FilterType::Nearest))
        }
    }
}

/// Largest size within `max_width` x `max_height` with the source aspect ratio.
/// The constrained side is rounded to whichever of floor/ceil keeps the ratio
/// closest; exact ties go to the floor. Never returns a zero side.
fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let aspect = width as f64 / height as f64;
    let (max_w, max_h) = (max_width as f64, max_height as f64);

    let closest = |value: f64, error: &dyn Fn(f64) -> f64| -> u32 {
        let (floor, ceil) = (value.floor(), value.ceil());
        let best = if error(ceil) < error(floor) { ceil } else { floor };
        (best as u32).max(1)
    };

    if max_w / max_h >= aspect {
        let w = closest(max_h * aspect, &|n| (aspect - n / max_h).abs());
        (w, max_height)
    } else {
        let h = closest(max_w / aspect, &|n| {
            if n == 0.0 {
                0.0
            } else {
                (aspect - max_w / n).abs()
            }
        });
        (max_width, h)
    }
}
