//! Error types for build operations.

use rantc_core::CompileError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while building definition files.
///
/// A missing input file or folder is not an error; it is a no-op.
#[derive(Debug, Error)]
pub enum BuildError {
    /// I/O error on a path that exists.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration rejected before building.
    #[error("invalid build configuration: {0}")]
    Config(#[from] CompileError),

    /// A spawned subtree task panicked or was aborted.
    #[error("build task failed: {0}")]
    TaskFailed(String),
}

impl BuildError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
