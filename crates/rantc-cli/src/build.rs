//! Build command implementation

use crate::cli::BuildArgs;
use crate::settings::Settings;
use anyhow::{Context, Result};
use rantc_build::{BuildSummary, MessageBuilder};
use rantc_core::LogLevel;
use rantc_logging::{DiagnosticTally, LevelControl, LoggingError};
use std::path::Path;
use std::process::ExitCode;

/// Run the build command
pub fn run(args: BuildArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let settings = Settings::load(args.config.as_deref(), &cwd)?;

    let mut config = settings.compiler.clone();
    args.apply(&mut config);

    let mut level = settings.log_level()?;
    if config.verbose {
        level = level.min(LogLevel::Debug);
    }
    match LevelControl::global().set_level(level) {
        Ok(()) => {}
        Err(LoggingError::NotInitialized) => tracing::debug!("Log level unchanged: {}", level),
        Err(e) => tracing::warn!("Log level unchanged: {}", e),
    }

    // Only diagnostics logged by this build decide the exit code
    DiagnosticTally::global().reset();

    let mut runtime = tokio::runtime::Builder::new_multi_thread();
    if let Some(threads) = settings.runtime.worker_threads {
        runtime.worker_threads(threads);
    }
    let runtime = runtime
        .thread_name("rant-build")
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    let builder = MessageBuilder::new(config).context("Invalid build configuration")?;

    println!("Building messages in: {}", args.path.display());
    if let Some(output) = &args.output {
        println!("Output: {}", output.display());
    }

    let summary = runtime.block_on(build_path(
        &builder,
        &args.path,
        args.output.as_deref(),
        args.is_recursive(),
    ));

    if summary.files_compiled == 0 && summary.failures == 0 {
        tracing::warn!("No message definitions found at {}", args.path.display());
    }

    let tally = DiagnosticTally::global().snapshot();
    if summary.is_success() && !tally.has_errors() {
        println!("\n✓ {summary}");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\n✗ {summary}");
        if let Some(last) = DiagnosticTally::global().last_error() {
            println!("Last error: {last}");
        }
        Ok(ExitCode::FAILURE)
    }
}

/// Build a single file, a folder, or a folder tree
async fn build_path(
    builder: &MessageBuilder,
    path: &Path,
    output: Option<&Path>,
    recursive: bool,
) -> BuildSummary {
    if path.is_file() {
        let mut summary = BuildSummary::default();
        let result = builder.compile_file(path, output).await;
        if let Err(e) = &result {
            tracing::error!("Failed to build {}: {}", path.display(), e);
        }
        summary.record(&result);
        summary
    } else if recursive {
        builder.compile_folder_recursive(path, output).await
    } else {
        builder.compile_folder(path, output).await
    }
}
