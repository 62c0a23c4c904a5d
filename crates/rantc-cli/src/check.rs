//! Check command implementation

use crate::cli::CheckArgs;
use anyhow::{Context, Result};
use rantc_core::{CompiledMessage, CompilerConfig, Target, compile_source, message_name_from_path};
use std::fmt::Write;
use std::path::Path;
use std::process::ExitCode;

/// Run the check command
pub fn run(args: CheckArgs) -> Result<ExitCode> {
    let config = config_for(&args.lang)?;

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read definition: {:?}", args.file))?;
    let name = message_name_from_path(&args.file)
        .with_context(|| format!("Cannot derive a message name from {:?}", args.file))?;

    let compiled = compile_source(&name, &text, &config);
    print!("{}", report(&args.file, &compiled, args.print));

    Ok(if compiled.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Targets named on the command line, or the default selection when none are
fn config_for(langs: &[String]) -> Result<CompilerConfig> {
    if langs.is_empty() {
        return Ok(CompilerConfig::default());
    }

    let mut config = CompilerConfig::new().with_csharp(false);
    for lang in langs {
        let target: Target = lang.parse()?;
        config.targets.set(target, true);
    }
    Ok(config)
}

fn report(path: &Path, compiled: &CompiledMessage, print: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Checking definition: {}", path.display());
    let _ = writeln!(out, "✓ Message: {} ({})", compiled.name, compiled.kind);
    for diagnostic in &compiled.diagnostics {
        let _ = writeln!(out, "  {diagnostic}");
    }
    let _ = writeln!(
        out,
        "{} {} warnings, {} errors",
        if compiled.has_errors() { "✗" } else { "✓" },
        compiled.warning_count(),
        compiled.error_count()
    );

    if print {
        for file in &compiled.files {
            let _ = write!(out, "\n==> {} <==\n{}", file.file_name, file.contents);
        }
    }

    out
}

#[cfg(test)]
#[path = "check/check_tests.rs"]
mod check_tests;
