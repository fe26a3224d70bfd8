use crate::error::ConvertError;
use crate::extract::Coordinate;
use clap::ValueEnum;
use std::fs;
use std::io::Write;
use std::path::Path;

/// How the coordinate list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `[(x, y), (x, y), ...]`
    Tuple,
    /// `[[x,y],[x,y],...]`
    Json,
}

/// Render as a bracketed list of parenthesized pairs, e.g. `[(0, 0), (5, 3)]`
pub fn format_tuples(coordinates: &[Coordinate]) -> String {
    let pairs: Vec<String> = coordinates
        .iter()
        .map(|c| format!("({}, {})", c.x, c.y))
        .collect();
    format!("[{}]", pairs.join(", "))
}

pub fn render(coordinates: &[Coordinate], format: OutputFormat) -> Result<String, ConvertError> {
    match format {
        OutputFormat::Tuple => Ok(format_tuples(coordinates)),
        OutputFormat::Json => Ok(serde_json::to_string(coordinates)?),
    }
}

/// Write `rendered` plus a trailing newline to `path`.
///
/// Regular files are replaced atomically: the data lands in a temporary file
/// next to `path` that is persisted only once fully written. A new file gets
/// the usual umask-derived mode, an existing one keeps its permissions.
/// Symlinks and special files such as `/dev/stdout` are written in place.
pub fn write(path: &Path, rendered: &str) -> Result<(), ConvertError> {
    let write_err = |source: std::io::Error| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let is_symlink = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    let existing = fs::metadata(path).ok();

    if is_symlink || existing.as_ref().is_some_and(|m| !m.is_file()) {
        let mut file = fs::File::create(path).map_err(write_err)?;
        file.write_all(rendered.as_bytes()).map_err(write_err)?;
        file.write_all(b"\n").map_err(write_err)?;
        file.flush().map_err(write_err)?;
        return Ok(());
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".img2tuple-").suffix(".tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = existing
            .as_ref()
            .map(|m| m.permissions())
            .unwrap_or_else(|| fs::Permissions::from_mode(0o666));
        builder.permissions(permissions);
    }

    let mut file = builder.tempfile_in(dir).map_err(write_err)?;
    file.write_all(rendered.as_bytes()).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
