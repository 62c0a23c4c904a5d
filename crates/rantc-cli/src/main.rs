//! rant CLI - Message compiler front end
//!
//! Commands:
//! - `rant msg build` - Compile .msg definitions under a folder (recursively by default)
//! - `rant msg check` - Compile one definition in memory and report diagnostics

use clap::Parser;
use cli::{Cli, Commands, MsgCommands};
use rantc_core::LogLevel;
use std::process::ExitCode;

mod build;
mod check;
mod cli;
mod settings;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Settings may change the level once they are loaded
    rantc_logging::init_logging(LogLevel::Info);

    match cli.command {
        Commands::Msg { command } => match command {
            MsgCommands::Build(args) => build::run(args),
            MsgCommands::Check(args) => check::run(args),
        },
    }
}
