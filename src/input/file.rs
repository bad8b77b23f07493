use super::{LoadError, LoadedSource};
use std::io::ErrorKind;
use std::path::Path;

/// Load source text from a UTF-8 file.
///
/// Whitespace-only files are rejected with [`LoadError::EmptySource`].
pub fn load(path: &str) -> Result<LoadedSource, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => LoadError::InvalidEncoding(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    if text.trim().is_empty() {
        tracing::warn!(path = %path.display(), "source file is empty");
        return Err(LoadError::EmptySource(path.display().to_string()));
    }

    tracing::info!(path = %path.display(), bytes = text.len(), "loaded source file");
    Ok(LoadedSource {
        text,
        origin: format!("file:{}", path.display()),
    })
}
