#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Target name parsing
// ============================================================================

#[test_case("csharp", Target::CSharp)]
#[test_case("CSharp", Target::CSharp)]
#[test_case("cs", Target::CSharp)]
#[test_case("c#", Target::CSharp)]
#[test_case("python", Target::Python)]
#[test_case("py", Target::Python)]
fn Target___from_str___accepts_aliases(input: &str, expected: Target) {
    assert_eq!(input.parse::<Target>().unwrap(), expected);
}

#[test_case(Target::CSharp, "cs")]
#[test_case(Target::Python, "py")]
fn Target___extension___matches_language(target: Target, expected: &str) {
    assert_eq!(target.extension(), expected);
}

#[test_case(Target::CSharp, "csharp")]
#[test_case(Target::Python, "python")]
fn Target___display___uses_canonical_name(target: Target, expected: &str) {
    assert_eq!(target.to_string(), expected);
}

// ============================================================================
// Concurrency cap validation
// ============================================================================

#[test_case(None, true)]
#[test_case(Some(0), false)]
#[test_case(Some(1), true)]
#[test_case(Some(64), true)]
fn CompilerConfig___validate___checks_cap(cap: Option<usize>, valid: bool) {
    let config = CompilerConfig {
        max_concurrent_subtrees: cap,
        ..CompilerConfig::default()
    };

    assert_eq!(config.validate().is_ok(), valid);
}
