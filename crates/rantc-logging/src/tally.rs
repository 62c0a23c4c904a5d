//! Process-wide count of warning and error events

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use rantc_core::LogLevel;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Global tally instance
static TALLY: OnceCell<DiagnosticTally> = OnceCell::new();

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TallySnapshot {
    pub warnings: usize,
    pub errors: usize,
}

impl TallySnapshot {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Counts WARN and ERROR events seen by [`TallyLayer`](crate::TallyLayer)
pub struct DiagnosticTally {
    warnings: AtomicUsize,
    errors: AtomicUsize,
    last_error: RwLock<Option<String>>,
}

impl DiagnosticTally {
    pub fn new() -> Self {
        Self {
            warnings: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            last_error: RwLock::new(None),
        }
    }

    /// Get the global tally instance
    pub fn global() -> &'static DiagnosticTally {
        TALLY.get_or_init(DiagnosticTally::new)
    }

    /// Count one event. Levels below `Warn` are ignored.
    pub fn record(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Warn => {
                self.warnings.fetch_add(1, Ordering::SeqCst);
            }
            LogLevel::Error => {
                self.errors.fetch_add(1, Ordering::SeqCst);
                *self.last_error.write() = Some(message.to_string());
            }
            _ => {}
        }
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    /// Text of the most recent error event
    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    pub fn snapshot(&self) -> TallySnapshot {
        TallySnapshot {
            warnings: self.warnings(),
            errors: self.errors(),
        }
    }

    /// Zero the counters and forget the last error
    pub fn reset(&self) {
        self.warnings.store(0, Ordering::SeqCst);
        self.errors.store(0, Ordering::SeqCst);
        *self.last_error.write() = None;
    }
}

impl Default for DiagnosticTally {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tally/tally_tests.rs"]
mod tally_tests;
