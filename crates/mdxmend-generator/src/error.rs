//! Generator errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing generated articles.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Creating a directory or writing a file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding the article records failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering frontmatter failed.
    #[error(transparent)]
    Core(#[from] mdxmend_core::CoreError),
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

impl GeneratorError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
