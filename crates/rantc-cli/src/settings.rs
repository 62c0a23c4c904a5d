//! rant.toml parsing and validation

use anyhow::{Context, Result};
use rantc_core::{CompilerConfig, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_SETTINGS_FILE: &str = "rant.toml";

/// rant.toml structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub runtime: RuntimeSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSection {
    /// Tokio worker threads (default: one per core)
    #[serde(default)]
    pub worker_threads: Option<usize>,

    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    /// Load settings from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse settings from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings")
    }

    /// Load the explicit file, else `rant.toml` in `dir` when present, else defaults
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback: PathBuf = dir.join(DEFAULT_SETTINGS_FILE);
                if fallback.is_file() {
                    Self::from_file(&fallback)?
                } else {
                    Self::default()
                }
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        self.compiler.validate().context("Invalid [compiler] section")?;

        if self.runtime.worker_threads == Some(0) {
            anyhow::bail!("runtime.worker_threads must be at least 1");
        }

        self.log_level()?;
        Ok(())
    }

    /// Configured log level, `Info` when unset
    pub fn log_level(&self) -> Result<LogLevel> {
        match &self.runtime.log_level {
            Some(level) => level
                .parse::<LogLevel>()
                .with_context(|| format!("Invalid runtime.log_level: {level}")),
            None => Ok(LogLevel::Info),
        }
    }
}
