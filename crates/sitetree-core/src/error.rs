//! Error types for build operations.

use std::path::PathBuf;

use thiserror::Error;

/// Prefix of the content substituted for a file that could not be read.
pub const READ_ERROR_PREFIX: &str = "[Error reading file: ";

/// Errors that abort a build.
///
/// Unreadable files are not represented here: they are recovered in place
/// with [`read_error_sentinel`] and never stop the walk.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Listing a directory failed (missing, not a directory, permissions).
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the generated module failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tree could not be serialized.
    #[error("Failed to serialize tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BuildError {
    /// Create a directory listing error with path context.
    pub fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    /// Create a write error with path context.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Content embedded in place of a file whose read failed.
pub fn read_error_sentinel(error: &std::io::Error) -> String {
    format!("{READ_ERROR_PREFIX}{error}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_read_display() {
        let err = BuildError::directory_read(
            "/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(matches!(err, BuildError::DirectoryRead { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to read directory /missing: no such directory"
        );
    }

    #[test]
    fn test_read_error_sentinel_format() {
        let err = std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        );
        let sentinel = read_error_sentinel(&err);
        assert_eq!(
            sentinel,
            "[Error reading file: stream did not contain valid UTF-8]"
        );
        assert!(sentinel.starts_with(READ_ERROR_PREFIX));
    }
}
