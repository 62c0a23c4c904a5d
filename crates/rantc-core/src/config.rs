//! Compiler configuration types

use crate::error::{CompileError, CompileResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An output language the compiler can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Primary target: C# value types implementing `IMessage`
    CSharp,
    /// Secondary target: Python dataclasses
    Python,
}

impl Target {
    /// All supported targets, in emission order
    pub const ALL: [Target; 2] = [Target::CSharp, Target::Python];

    /// File extension (without the dot) of generated sources
    pub fn extension(self) -> &'static str {
        match self {
            Target::CSharp => "cs",
            Target::Python => "py",
        }
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Target::CSharp => "csharp",
            Target::Python => "python",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(Target::CSharp),
            "python" | "py" => Ok(Target::Python),
            _ => Err(CompileError::UnknownTarget(s.to_string())),
        }
    }
}

/// Which targets are emitted for every compiled definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSelection {
    #[serde(default = "default_csharp")]
    pub csharp: bool,

    #[serde(default)]
    pub python: bool,
}

fn default_csharp() -> bool {
    true
}

impl Default for TargetSelection {
    fn default() -> Self {
        Self {
            csharp: default_csharp(),
            python: false,
        }
    }
}

impl TargetSelection {
    /// Check whether a target is enabled
    pub fn is_enabled(&self, target: Target) -> bool {
        match target {
            Target::CSharp => self.csharp,
            Target::Python => self.python,
        }
    }

    /// Enable or disable a target
    pub fn set(&mut self, target: Target, enabled: bool) {
        match target {
            Target::CSharp => self.csharp = enabled,
            Target::Python => self.python = enabled,
        }
    }
}

/// Configuration threaded through every compile entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompilerConfig {
    /// Targets to emit
    #[serde(default)]
    pub targets: TargetSelection,

    /// Log per-file progress ("building", "saved") at info level
    #[serde(default)]
    pub verbose: bool,

    /// Maximum number of folders compiling their own files at once during a
    /// recursive build (None = unbounded)
    #[serde(default)]
    pub max_concurrent_subtrees: Option<usize>,
}

impl CompilerConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable C# output
    pub fn with_csharp(mut self, enabled: bool) -> Self {
        self.targets.csharp = enabled;
        self
    }

    /// Enable or disable Python output
    pub fn with_python(mut self, enabled: bool) -> Self {
        self.targets.python = enabled;
        self
    }

    /// Toggle verbose progress logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Cap the number of concurrently compiling folders
    pub fn with_max_concurrent(mut self, limit: usize) -> Self {
        self.max_concurrent_subtrees = Some(limit);
        self
    }

    /// Enabled targets in emission order
    pub fn enabled_targets(&self) -> Vec<Target> {
        Target::ALL
            .into_iter()
            .filter(|t| self.targets.is_enabled(*t))
            .collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> CompileResult<()> {
        if self.max_concurrent_subtrees == Some(0) {
            return Err(CompileError::InvalidConfig(
                "max_concurrent_subtrees must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
