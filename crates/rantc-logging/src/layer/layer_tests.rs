#![allow(non_snake_case)]

use super::*;
use tracing_subscriber::prelude::*;

fn leaked_tally() -> &'static DiagnosticTally {
    Box::leak(Box::new(DiagnosticTally::new()))
}

#[test]
fn TallyLayer___convert_level___maps_every_level() {
    assert_eq!(TallyLayer::convert_level(&Level::TRACE), LogLevel::Trace);
    assert_eq!(TallyLayer::convert_level(&Level::DEBUG), LogLevel::Debug);
    assert_eq!(TallyLayer::convert_level(&Level::INFO), LogLevel::Info);
    assert_eq!(TallyLayer::convert_level(&Level::WARN), LogLevel::Warn);
    assert_eq!(TallyLayer::convert_level(&Level::ERROR), LogLevel::Error);
}

#[test]
fn TallyLayer___events___counts_warn_and_error() {
    let tally = leaked_tally();
    let subscriber = tracing_subscriber::registry().with(TallyLayer::with_tally(tally));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("Building Pose...");
        tracing::debug!("already imported");
        tracing::warn!("skipping duplicate namespace demo");
        tracing::warn!("skipping line 3 - type or name is empty");
        tracing::error!("unknown definition kind");
    });

    assert_eq!(tally.warnings(), 2);
    assert_eq!(tally.errors(), 1);
}

#[test]
fn TallyLayer___error_with_fields___keeps_message_and_fields() {
    let tally = leaked_tally();
    let subscriber = tracing_subscriber::registry().with(TallyLayer::with_tally(tally));

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!(definition = %"Pose", line = 4, "unknown definition kind");
    });

    let last = tally.last_error().unwrap();
    assert!(last.starts_with("unknown definition kind"), "{last}");
    assert!(last.contains("definition=Pose"), "{last}");
    assert!(last.contains("line=4"), "{last}");
}

#[test]
fn TallyLayer___message_only___no_extra_fields() {
    let tally = leaked_tally();
    let subscriber = tracing_subscriber::registry().with(TallyLayer::with_tally(tally));

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!("Failed to build a.msg");
    });

    assert_eq!(tally.last_error().as_deref(), Some("Failed to build a.msg"));
}

#[test]
fn TallyLayer___below_filter___not_counted() {
    let tally = leaked_tally();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::ERROR)
        .with(TallyLayer::with_tally(tally));

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("filtered");
        tracing::error!("kept");
    });

    assert_eq!(tally.warnings(), 0);
    assert_eq!(tally.errors(), 1);
}

#[test]
fn MessageVisitor___finish___fields_without_message() {
    let visitor = MessageVisitor {
        message: String::new(),
        fields: " line=4".to_string(),
    };

    assert_eq!(visitor.finish(), "line=4");
}
