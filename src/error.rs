//! Error types for building, previewing and inspecting the portfolio

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the renderer.
///
/// Rendering itself never fails; these cover the filesystem, the preview
/// server and outline extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem operation failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to extract an outline from rendered HTML
    #[error("Outline extraction failed: {0}")]
    Outline(String),

    /// Preview server error
    #[error("Preview server error: {0}")]
    Serve(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
