#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn kinds(text: &str) -> Vec<LineKind> {
    tokenize(text).into_iter().map(|l| l.kind).collect()
}

fn field(ty: &str, name: &str) -> LineKind {
    LineKind::Field {
        ty: ty.into(),
        name: name.into(),
    }
}

#[test]
fn tokenize___skips_blank_lines_and_keeps_numbers() {
    let lines = tokenize("\nstring data\n\n   \nint32 count\n");

    let numbers: Vec<usize> = lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![2, 5]);
}

#[test]
fn tokenize___strips_trailing_terminator() {
    assert_eq!(kinds("float64 x;"), vec![field("float64", "x")]);
    assert_eq!(kinds("float64 x ;;"), vec![field("float64", "x")]);
}

#[test]
fn tokenize___handles_crlf_line_endings() {
    assert_eq!(
        kinds("string a\r\nstring b\r\n"),
        vec![field("string", "a"), field("string", "b")]
    );
}

#[test]
fn tokenize___field_name_is_first_token_of_remainder() {
    assert_eq!(kinds("string   data   extra"), vec![field("string", "data")]);
}

#[test]
fn tokenize___splits_on_tabs() {
    assert_eq!(kinds("bool\tready"), vec![field("bool", "ready")]);
}

#[test]
fn tokenize___type_directive_keeps_two_word_argument() {
    assert_eq!(
        kinds("type record   struct"),
        vec![LineKind::Directive(Directive::Type("record struct".into()))]
    );
}

#[test]
fn tokenize___namespace_and_using_directives() {
    assert_eq!(
        kinds("namespace demo\nusing System.Numerics"),
        vec![
            LineKind::Directive(Directive::Namespace("demo".into())),
            LineKind::Directive(Directive::Using("System.Numerics".into())),
        ]
    );
}

#[test_case("# an example field", "an example field")]
#[test_case("#no space", "no space")]
#[test_case("// slashes", "slashes")]
#[test_case("//tight", "tight")]
#[test_case("#", "")]
#[test_case("# with.a.dot", "with.a.dot")]
fn tokenize___comment_lines_strip_marker(input: &str, expected: &str) {
    assert_eq!(kinds(input), vec![LineKind::Comment(expected.into())]);
}

#[test_case("string")]
#[test_case("namespace")]
#[test_case("type;")]
fn tokenize___single_token_is_malformed(input: &str) {
    assert_eq!(kinds(input), vec![LineKind::Malformed]);
}
