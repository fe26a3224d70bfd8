use crate::error::ConvertError;
use crate::extract::{self, Coordinate};
use image::{DynamicImage, RgbImage};
use std::time::Instant;

use super::steps;
use super::steps::resize::ResizeMode;

/// Options for a single conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub width: u32,
    pub height: u32,
    pub resize_mode: ResizeMode,
    pub clean_pixels: bool,
    /// Black-pixel tolerance; the only one used by the pipeline
    pub tolerance: i32,
}

/// Timing information for a single step
#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of a pipeline run including timing stats
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Final RGB grid the coordinates were taken from
    pub image: RgbImage,
    /// Non-black pixels in row-major order
    pub coordinates: Vec<Coordinate>,
    /// Total processing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Resize, optionally clean, then extract non-black pixel coordinates
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn process(&self, image: DynamicImage) -> Result<PipelineResult, ConvertError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();
        let opts = self.options;

        let resized = self.run_step("resize", image, &mut steps_timing, |img| {
            steps::resize::apply(img, opts.width, opts.height, opts.resize_mode)
        })?;
        tracing::debug!(
            mode = opts.resize_mode.as_str(),
            "Resized to {}x{}",
            resized.width(),
            resized.height()
        );

        let mut img = self.run_step("rgb", resized, &mut steps_timing, steps::rgb::apply)?;

        if opts.clean_pixels {
            img = self.run_step("denoise", img, &mut steps_timing, steps::denoise::apply)?;
        }

        let coordinates = self.run_step("extract", &img, &mut steps_timing, |img| {
            Ok(extract::extract_coordinates(img, opts.tolerance))
        })?;

        Ok(PipelineResult {
            image: img,
            coordinates,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: steps_timing,
        })
    }

    fn run_step<I, O, F>(
        &self,
        name: &str,
        input: I,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<O, ConvertError>
    where
        F: FnOnce(I) -> Result<O, ConvertError>,
    {
        let step_start = Instant::now();
        let result = step_fn(input)?;
        let time_ms = step_start.elapsed().as_millis() as u64;
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms,
        });
        Ok(result)
    }
}
