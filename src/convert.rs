use crate::config::Config;
use crate::error::ConvertError;
use crate::preprocessing::Pipeline;
use crate::{loader, output};

/// Run one conversion: load, process, write, and optionally print
pub fn run(config: Config) -> anyhow::Result<()> {
    convert(&config).map_err(|e| {
        tracing::error!(code = e.code(), "{}", e);
        e.into()
    })
}

fn convert(config: &Config) -> Result<(), ConvertError> {
    let image = loader::load(&config.input_path)?;
    tracing::info!(
        "Loaded {} ({}x{})",
        config.input_path.display(),
        image.width(),
        image.height()
    );

    let result = Pipeline::new(config.pipeline_options()).process(image)?;
    tracing::info!(
        clean_pixels = config.clean_pixels,
        tolerance = config.tolerance,
        total_time_ms = result.total_time_ms,
        "Extracted {} non-black pixels from {}x{} grid",
        result.coordinates.len(),
        result.image.width(),
        result.image.height()
    );

    for step in &result.steps {
        tracing::debug!(step = %step.name, time_ms = step.time_ms, "Step finished");
    }

    let rendered = output::render(&result.coordinates, config.format)?;
    output::write(&config.output_file, &rendered)?;
    tracing::info!("Wrote {}", config.output_file.display());

    if config.show_output {
        println!("{}", rendered);
    }

    Ok(())
}
