#![allow(non_snake_case)]

use super::*;

#[test]
fn config_for___no_languages___default_targets() {
    let config = config_for(&[]).unwrap();

    assert_eq!(config.enabled_targets(), vec![Target::CSharp]);
}

#[test]
fn config_for___python_only___disables_csharp() {
    let config = config_for(&["py".to_string()]).unwrap();

    assert_eq!(config.enabled_targets(), vec![Target::Python]);
}

#[test]
fn config_for___both___enables_both() {
    let config = config_for(&["python".to_string(), "cs".to_string()]).unwrap();

    assert_eq!(
        config.enabled_targets(),
        vec![Target::CSharp, Target::Python]
    );
}

#[test]
fn config_for___unknown_language___fails() {
    let err = config_for(&["java".to_string()]).unwrap_err();

    assert!(err.to_string().contains("java"));
}

#[test]
fn report___clean_definition___lists_name_and_kind() {
    let compiled = compile_source("Ping", "type class\nint32 seq", &CompilerConfig::default());

    let out = report(Path::new("msg/ping.msg"), &compiled, false);

    assert!(out.contains("Checking definition: msg/ping.msg"));
    assert!(out.contains("✓ Message: Ping (class)"));
    assert!(out.contains("✓ 0 warnings, 0 errors"));
    assert!(!out.contains("==>"));
}

#[test]
fn report___with_diagnostics___lists_each() {
    let compiled = compile_source(
        "Ping",
        "type enum\nnamespace a\nnamespace a\nint32 seq",
        &CompilerConfig::default(),
    );

    let out = report(Path::new("ping.msg"), &compiled, false);

    assert!(out.contains("  error (line 1)"));
    assert!(out.contains("  warning (line 3)"));
    assert!(out.contains("✗ 1 warnings, 1 errors"));
}

#[test]
fn report___print___appends_generated_sources() {
    let compiled = compile_source(
        "Ping",
        "int32 seq",
        &CompilerConfig::new().with_python(true),
    );

    let out = report(Path::new("ping.msg"), &compiled, true);

    assert!(out.contains("==> Ping.cs <==\nusing Rant.Messages;"));
    assert!(out.contains("==> Ping.py <=="));
    assert!(out.contains("class Ping(IMessage):"));
}
