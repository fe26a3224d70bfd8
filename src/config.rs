use crate::output::OutputFormat;
use crate::preprocessing::{PipelineOptions, ResizeMode};
use crate::Args;
use std::path::PathBuf;

/// Conversion configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_file: PathBuf,
    pub width: u32,
    pub height: u32,
    pub keep_aspect_ratio: bool,
    pub show_output: bool,
    pub clean_pixels: bool,
    pub tolerance: i32,
    pub format: OutputFormat,
}

impl Config {
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            width: self.width,
            height: self.height,
            resize_mode: if self.keep_aspect_ratio {
                ResizeMode::Fit
            } else {
                ResizeMode::Exact
            },
            clean_pixels: self.clean_pixels,
            tolerance: self.tolerance,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input_path: args.path,
            output_file: args.output_file,
            width: args.width,
            height: args.height,
            keep_aspect_ratio: args.keep_aspect_ratio,
            show_output: args.show_output,
            clean_pixels: args.clean_pixels,
            tolerance: args.tolerance,
            format: args.format,
        }
    }
}
