//! # rantc
//!
//! Compiler for `.msg` message definitions.
//!
//! A definition file holds one `<type> <name>` field per line, optional
//! `type`/`namespace`/`using` directives, and `#` or `//` comments that become
//! field documentation. rantc turns each file into a C# message class and,
//! optionally, a Python dataclass.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! rantc = "0.3"
//! ```
//!
//! ## Compiling in memory
//!
//! ```
//! use rantc::prelude::*;
//!
//! let text = "type record class\nnamespace demo\n# metres\nfloat64 distance\n";
//! let compiled = compile_source("Range", text, &CompilerConfig::default());
//!
//! let cs = compiled.file(Target::CSharp).unwrap();
//! assert!(cs.contents.contains("namespace demo.Messages;"));
//! assert!(cs.contents.contains("public record class Range : IMessage"));
//! assert!(cs.contents.contains("public double distance;"));
//! ```
//!
//! ## Building a tree of message folders
//!
//! ```no_run
//! use rantc::prelude::*;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), BuildError> {
//!     init_logging(LogLevel::Info);
//!
//!     let config = CompilerConfig::new().with_python(true).with_max_concurrent(4);
//!     let builder = MessageBuilder::new(config)?;
//!     let summary = builder.compile_folder_recursive(Path::new("."), None).await;
//!
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`rantc_core`] - Tokenizer, parser, normalizer, emitters and configuration
//! - [`rantc_build`] - Filesystem and concurrent tree builds
//! - [`rantc_logging`] - Subscriber setup and diagnostic tallying

// Re-export core types
pub use rantc_core::{
    CompileError, CompileResult, CompiledMessage, CompilerConfig, DefinitionKind, Diagnostic,
    GeneratedClass, GeneratedFile, LogLevel, Normalizer, ParsedDefinition, Severity, Target,
    TargetSelection, compile_source, message_name_from_path,
};

// Pipeline stages for callers that drive them individually
pub use rantc_core::{emit, line, model, naming, normalize, parser};

// Re-export build orchestration
pub use rantc_build::{
    BuildError, BuildResult, BuildSummary, DEFAULT_OUTPUT_DIR, MESSAGE_FOLDER_NAMES,
    MessageBuilder, is_message_folder,
};

// Re-export logging
pub use rantc_logging::{DiagnosticTally, LevelControl, LoggingError, TallySnapshot, init_logging};

// Re-export dependencies for convenience
pub use tokio;
pub use tracing;

/// Prelude module for convenient imports
///
/// This includes:
/// - Compilation: `compile_source`, `CompilerConfig`, `Target`, `CompiledMessage`
/// - Building: `MessageBuilder`, `BuildSummary`, `BuildError`
/// - Logging: `init_logging`, `LogLevel`, `DiagnosticTally`
pub mod prelude {
    pub use crate::{
        BuildError, BuildResult, BuildSummary, CompileError, CompiledMessage, CompilerConfig,
        DefinitionKind, Diagnostic, DiagnosticTally, LogLevel, MessageBuilder, Severity, Target,
        compile_source, init_logging,
    };
}
