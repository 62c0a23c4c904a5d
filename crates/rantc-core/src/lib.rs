//! rantc-core - Message-definition compiler
//!
//! Compiles line-oriented message definitions (`<type> <name>` per line, plus
//! `type`/`namespace`/`using` directives and `#`/`//` comments) into message classes
//! for each enabled target language.
//!
//! ```text
//! definition text
//!     ↓
//!  [line::tokenize]      one record per line
//!     ↓
//!  [parser::parse]       directives, imports, fields, docs → ParsedDefinition
//!     ↓
//!  [Normalizer]          per-target aliases and identifier escaping → GeneratedClass
//!     ↓
//!  [emit::render]        → source text
//! ```
//!
//! # Example
//!
//! ```
//! use rantc_core::{CompilerConfig, Target, compile_source};
//!
//! let compiled = compile_source("Ping", "int32 seq", &CompilerConfig::default());
//! let cs = compiled.file(Target::CSharp).unwrap();
//!
//! assert_eq!(cs.file_name, "Ping.cs");
//! assert!(cs.contents.contains("public int seq;"));
//! ```

mod compile;
mod config;
mod diagnostic;
mod error;

pub mod emit;
pub mod line;
pub mod model;
pub mod naming;
pub mod normalize;
pub mod parser;

pub use compile::{CompiledMessage, GeneratedFile, compile_source};
pub use config::{CompilerConfig, Target, TargetSelection};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{CompileError, CompileResult};
pub use model::{DefinitionKind, GeneratedClass, ParsedDefinition};
pub use naming::message_name_from_path;
pub use normalize::Normalizer;

/// Log verbosity shared by the logging and CLI crates
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            _ => Err(CompileError::UnknownLogLevel(s.to_string())),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CompileError, CompileResult, CompiledMessage, CompilerConfig, DefinitionKind, Diagnostic,
        GeneratedFile, LogLevel, Normalizer, Severity, Target, compile_source,
    };
}
