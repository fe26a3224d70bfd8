use crate::error::ConvertError;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Decode an image file of any format supported by `image`.
/// The format is guessed from the file content, falling back to the extension.
pub fn load(path: &Path) -> Result<DynamicImage, ConvertError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| ConvertError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

    reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
