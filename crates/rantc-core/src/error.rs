//! Error types for the message compiler

use thiserror::Error;

/// Result type alias for compiler operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Error type for compiler operations
///
/// Problems found inside a definition file are not errors: they are reported as
/// [`Diagnostic`](crate::Diagnostic)s and compilation continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// `type` directive argument is not a known definition kind
    #[error("unknown definition kind: expected one of {expected}, found {found}")]
    UnknownDefinitionKind { found: String, expected: String },

    /// Target language name not recognized
    #[error("unknown target: {0}")]
    UnknownTarget(String),

    /// Log level name not recognized
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
