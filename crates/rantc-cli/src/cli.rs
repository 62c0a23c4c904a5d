//! Command-line arguments

use clap::{Args, Parser, Subcommand};
use rantc_core::CompilerConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rant")]
#[command(author, version, about = "Robotics action networking toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tools for working with rant messages
    Msg {
        #[command(subcommand)]
        command: MsgCommands,
    },
}

#[derive(Subcommand)]
pub enum MsgCommands {
    /// Build messages at a given path
    Build(BuildArgs),

    /// Compile one definition in memory and report its diagnostics
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Folder containing .msg files, or a single .msg file
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Descend into msg/messages/msgs/mesg/mesgs/builtin_msgs folders (default)
    #[arg(long, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// Only compile the given folder
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Output folder (default: a `built` folder next to each definition)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to rant.toml (default: ./rant.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit C# classes
    #[arg(long, overrides_with = "no_csharp")]
    pub csharp: bool,

    /// Do not emit C# classes
    #[arg(long, overrides_with = "csharp")]
    pub no_csharp: bool,

    /// Emit Python dataclasses
    #[arg(long, overrides_with = "no_python")]
    pub python: bool,

    /// Do not emit Python dataclasses
    #[arg(long, overrides_with = "python")]
    pub no_python: bool,

    /// Log each file as it is built and saved
    #[arg(short, long)]
    pub verbose: bool,

    /// Maximum number of folders compiling at once
    #[arg(long, value_name = "N")]
    pub max_concurrent: Option<usize>,
}

impl BuildArgs {
    pub fn is_recursive(&self) -> bool {
        flag(self.recursive, self.no_recursive).unwrap_or(true)
    }

    /// Apply command-line overrides on top of file configuration
    pub fn apply(&self, config: &mut CompilerConfig) {
        if let Some(csharp) = flag(self.csharp, self.no_csharp) {
            config.targets.csharp = csharp;
        }
        if let Some(python) = flag(self.python, self.no_python) {
            config.targets.python = python;
        }
        if self.verbose {
            config.verbose = true;
        }
        if let Some(limit) = self.max_concurrent {
            config.max_concurrent_subtrees = Some(limit);
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Definition file to check
    pub file: PathBuf,

    /// Target language (csharp, python); repeat for several (default: csharp)
    #[arg(short, long)]
    pub lang: Vec<String>,

    /// Print the generated source
    #[arg(short, long)]
    pub print: bool,
}

/// Resolve a `--x`/`--no-x` pair; `None` when neither was given
fn flag(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "cli/cli_tests.rs"]
mod cli_tests;
