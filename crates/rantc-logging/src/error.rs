//! Error types for subscriber setup and level changes

use thiserror::Error;

/// Result type alias for logging operations
pub type LoggingResult<T> = Result<T, LoggingError>;

/// Error type for logging operations
#[derive(Error, Debug)]
pub enum LoggingError {
    /// [`init_logging`](crate::init_logging) has not installed a subscriber
    #[error("logging is not initialized")]
    NotInitialized,

    /// A level filter was already installed
    #[error("a level filter is already installed")]
    AlreadyInstalled,

    /// The subscriber owning the filter is gone
    #[error("failed to change log level: {0}")]
    Reload(#[from] tracing_subscriber::reload::Error),
}
