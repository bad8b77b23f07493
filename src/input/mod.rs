use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid file encoding: {0}")]
    InvalidEncoding(PathBuf),

    #[error("Source is empty: {0}")]
    EmptySource(String),
}

/// Raw source text and a label describing where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSource {
    pub text: String,
    pub origin: String,
}

pub mod clipboard;
pub mod file;
