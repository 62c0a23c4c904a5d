//! Tracing layer that tallies diagnostics, and subscriber setup

use crate::level::{LevelControl, level_filter};
use crate::tally::DiagnosticTally;
use rantc_core::LogLevel;
use std::fmt::Write;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that counts warning and error events
pub struct TallyLayer {
    tally: &'static DiagnosticTally,
}

impl TallyLayer {
    /// Create a layer feeding the global tally
    pub fn new() -> Self {
        Self {
            tally: DiagnosticTally::global(),
        }
    }

    /// Create a layer with a specific tally
    pub fn with_tally(tally: &'static DiagnosticTally) -> Self {
        Self { tally }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for TallyLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for TallyLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::convert_level(event.metadata().level());
        if level < LogLevel::Warn {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.tally.record(level, &visitor.finish());
    }
}

/// Collects the message plus any structured fields as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }
}

/// Install the global subscriber: a reloadable level filter, human-readable
/// output on stderr, and the [`TallyLayer`].
///
/// Only the first call installs anything; later calls leave the existing
/// subscriber in place and return `false`. Use
/// [`LevelControl::set_level`] to change the level afterwards.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;

    let (filter, handle) = tracing_subscriber::reload::Layer::new(level_filter(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(TallyLayer::new());

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    LevelControl::global().install(handle).is_ok()
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
