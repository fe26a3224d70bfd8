//! Image preprocessing ahead of coordinate extraction
//!
//! Resizes the decoded image, converts it to RGB and optionally removes
//! isolated pixels before the non-black pixels are collected.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, PipelineOptions};
pub use steps::resize::ResizeMode;
