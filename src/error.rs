use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read image {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize coordinates: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    /// Short machine-readable code, used in log events
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::ReadInput { .. } => "READ_INPUT",
            ConvertError::Decode { .. } => "DECODE",
            ConvertError::WriteOutput { .. } => "WRITE_OUTPUT",
            ConvertError::Serialize(_) => "SERIALIZE",
        }
    }
}
