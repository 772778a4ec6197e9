//! Error types for bundled-config.

use std::path::PathBuf;

/// Result type alias for bundled-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when locating or merging configuration resources.
///
/// Only [`ResourceNotFound`](ConfigError::ResourceNotFound),
/// [`IoError`](ConfigError::IoError) and [`InvalidPath`](ConfigError::InvalidPath)
/// ever reach a caller of the loader. Parse and serialize errors are produced by the
/// `try_merge*` functions and turned into empty content by the soft-failing wrappers.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither an external file nor a bundled resource exists at the path.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// An external file exists but could not be read.
    #[error("IO error reading {}: {source}", .path.display())]
    IoError {
        /// The file that failed to read
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// The requested path is not a usable relative resource path.
    #[error("Invalid resource path '{path}': {reason}")]
    InvalidPath {
        /// The path as requested
        path: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Failed to parse configuration content.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Failed to serialize configuration content.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}
