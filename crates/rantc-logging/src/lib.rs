//! rantc-logging - Subscriber setup for the rantc tools
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber with a reloadable level
//! - [`LevelControl`] to change the level at runtime, failing with [`LoggingError`]
//! - [`TallyLayer`] and [`DiagnosticTally`] to count warnings and errors logged
//!   during a build

mod error;
mod layer;
mod level;
mod tally;

pub use error::{LoggingError, LoggingResult};
pub use layer::{TallyLayer, init_logging};
pub use level::LevelControl;
pub use rantc_core::LogLevel;
pub use tally::{DiagnosticTally, TallySnapshot};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DiagnosticTally, LevelControl, LogLevel, TallyLayer, init_logging};
}
