//! Fix crate errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, listing, or writing articles.
#[derive(Debug, Error)]
pub enum FixError {
    /// Reading an article or list file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing an article back failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The articles directory does not exist.
    #[error("articles directory not found: {0}")]
    MissingDir(PathBuf),
}

/// Result type for fix operations.
pub type Result<T> = std::result::Result<T, FixError>;

impl FixError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = FixError::read(
            "en/de/post.mdx",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        let msg = err.to_string();
        assert!(msg.contains("failed to read en/de/post.mdx"));
        assert!(msg.contains("valid UTF-8"));
    }
}
