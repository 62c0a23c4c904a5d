//! Aggregated outcome of a folder or tree build

use crate::error::BuildResult;
use rantc_core::CompiledMessage;
use std::fmt;
use std::ops::AddAssign;

/// Counts collected while building one or more folders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Definition files that were read and compiled
    pub files_compiled: usize,
    /// Generated source files written to disk
    pub outputs_written: usize,
    /// Files that could not be read or written
    pub failures: usize,
    /// Warning diagnostics across all compiled files
    pub warnings: usize,
    /// Error diagnostics across all compiled files
    pub errors: usize,
}

impl BuildSummary {
    /// Fold the outcome of one `compile_file` call into the summary
    pub fn record(&mut self, result: &BuildResult<Option<CompiledMessage>>) {
        match result {
            Ok(Some(compiled)) => {
                self.files_compiled += 1;
                self.outputs_written += compiled.files.len();
                self.warnings += compiled.warning_count();
                self.errors += compiled.error_count();
            }
            Ok(None) => {}
            Err(_) => self.failures += 1,
        }
    }

    /// No failures and no error diagnostics
    pub fn is_success(&self) -> bool {
        self.failures == 0 && self.errors == 0
    }
}

impl AddAssign for BuildSummary {
    fn add_assign(&mut self, other: Self) {
        self.files_compiled += other.files_compiled;
        self.outputs_written += other.outputs_written;
        self.failures += other.failures;
        self.warnings += other.warnings;
        self.errors += other.errors;
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} compiled, {} written, {} failed, {} warnings, {} errors",
            self.files_compiled, self.outputs_written, self.failures, self.warnings, self.errors
        )
    }
}
