use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod convert;
mod error;
mod extract;
mod loader;
mod output;
mod preprocessing;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "img2tuple")]
#[command(
    about = "Resize an image, optionally clean isolated pixels, and write the coordinates of its non-black pixels as tuples"
)]
#[command(version)]
pub struct Args {
    /// The width to which the image will be resized in pixels
    #[arg(short = 'W', long, default_value_t = 128, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// The height to which the image will be resized in pixels
    #[arg(short = 'H', long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Path to the image file to process
    #[arg(short, long)]
    pub path: PathBuf,

    /// Preserve the original aspect ratio, shrinking the image to fit within width x height
    #[arg(short, long)]
    pub keep_aspect_ratio: bool,

    /// File the coordinate list is written to
    #[arg(short, long, default_value = "tuple_array.txt")]
    pub output_file: PathBuf,

    /// Also print the coordinate list to standard output
    #[arg(short, long)]
    pub show_output: bool,

    /// Replace isolated (noisy) pixels with black before extraction
    #[arg(short, long)]
    pub clean_pixels: bool,

    /// Tolerance for identifying black pixels (per channel)
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pub tolerance: i32,

    /// Output rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Tuple)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so --show-output keeps stdout clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from(args);

    tracing::info!("Starting img2tuple v{}", env!("CARGO_PKG_VERSION"));

    convert::run(config)
}
