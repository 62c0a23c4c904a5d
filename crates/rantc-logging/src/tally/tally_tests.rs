#![allow(non_snake_case)]

use super::*;

#[test]
fn DiagnosticTally___new___starts_empty() {
    let tally = DiagnosticTally::new();

    assert_eq!(tally.snapshot(), TallySnapshot::default());
    assert!(tally.last_error().is_none());
}

#[test]
fn DiagnosticTally___record___counts_warn_and_error_only() {
    let tally = DiagnosticTally::new();

    tally.record(LogLevel::Trace, "t");
    tally.record(LogLevel::Debug, "d");
    tally.record(LogLevel::Info, "i");
    tally.record(LogLevel::Warn, "w");
    tally.record(LogLevel::Error, "e");
    tally.record(LogLevel::Warn, "w2");

    assert_eq!(tally.warnings(), 2);
    assert_eq!(tally.errors(), 1);
}

#[test]
fn DiagnosticTally___record___keeps_latest_error() {
    let tally = DiagnosticTally::new();

    tally.record(LogLevel::Error, "first");
    tally.record(LogLevel::Error, "second");
    tally.record(LogLevel::Warn, "not an error");

    assert_eq!(tally.last_error().as_deref(), Some("second"));
}

#[test]
fn DiagnosticTally___reset___clears_everything() {
    let tally = DiagnosticTally::new();
    tally.record(LogLevel::Warn, "w");
    tally.record(LogLevel::Error, "e");

    tally.reset();

    assert_eq!(tally.snapshot(), TallySnapshot::default());
    assert!(tally.last_error().is_none());
}

#[test]
fn DiagnosticTally___global___returns_same_instance() {
    let a = DiagnosticTally::global() as *const DiagnosticTally;
    let b = DiagnosticTally::global() as *const DiagnosticTally;

    assert_eq!(a, b);
}

#[test]
fn TallySnapshot___has_errors___only_for_errors() {
    assert!(!TallySnapshot { warnings: 3, errors: 0 }.has_errors());
    assert!(TallySnapshot { warnings: 0, errors: 1 }.has_errors());
}

#[test]
fn DiagnosticTally___concurrent_records___are_all_counted() {
    let tally = DiagnosticTally::new();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..250 {
                    tally.record(LogLevel::Warn, "w");
                }
            });
        }
    });

    assert_eq!(tally.warnings(), 1000);
}
