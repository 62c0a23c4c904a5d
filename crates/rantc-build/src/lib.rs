//! rantc-build - Filesystem build orchestration for message definitions
//!
//! Wraps the in-memory compiler from `rantc-core` with:
//! - single-file builds ([`MessageBuilder::compile_file`])
//! - flat folder builds ([`MessageBuilder::compile_folder`])
//! - concurrent tree builds over recognized message folders
//!   ([`MessageBuilder::compile_folder_recursive`])
//!
//! Missing inputs are no-ops. Per-file failures are logged and counted in a
//! [`BuildSummary`] instead of aborting the rest of the build.

mod builder;
mod error;
mod summary;

pub use builder::{
    DEFAULT_OUTPUT_DIR, DEFINITION_EXTENSION, MESSAGE_FOLDER_NAMES, MessageBuilder,
    default_output_dir, is_definition_file, is_message_folder,
};
pub use error::{BuildError, BuildResult};
pub use summary::BuildSummary;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BuildError, BuildResult, BuildSummary, MessageBuilder};
}
