//! Line tokenizer for definition files
//!
//! Turns definition text into one [`Line`] record per non-blank line. Every later
//! stage edits this single sequence, so the type, name and line views of a line can
//! never drift apart.

/// Keyword of the definition-kind directive
pub const TYPE_KEYWORD: &str = "type";
/// Keyword of the namespace directive
pub const NAMESPACE_KEYWORD: &str = "namespace";
/// Keyword of the import directive
pub const USING_KEYWORD: &str = "using";

/// A directive line and its argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `type <kind>`
    Type(String),
    /// `namespace <name>`
    Namespace(String),
    /// `using <name>`
    Using(String),
}

/// Classification of one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Comment text with the marker stripped
    Comment(String),
    Directive(Directive),
    Field { ty: String, name: String },
    /// Missing a type or a name
    Malformed,
}

/// One non-blank line of a definition file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the source text
    pub number: usize,
    pub kind: LineKind,
}

/// Split definition text into classified lines.
///
/// Lines are trimmed and stripped of trailing `;` terminators; blank lines are
/// dropped. Comments start with `#` or `//`. Anything else is split on the first
/// whitespace run into a type (or directive keyword) and the remainder.
pub fn tokenize(text: &str) -> Vec<Line> {
    text.split('\n')
        .enumerate()
        .filter_map(|(index, raw)| {
            let trimmed = raw.trim().trim_end_matches(';').trim_end();
            if trimmed.is_empty() {
                return None;
            }
            Some(Line {
                number: index + 1,
                kind: classify(trimmed),
            })
        })
        .collect()
}

fn classify(line: &str) -> LineKind {
    if let Some(text) = line.strip_prefix("//") {
        return LineKind::Comment(text.trim().to_string());
    }
    if let Some(text) = line.strip_prefix('#') {
        return LineKind::Comment(text.trim().to_string());
    }

    let Some((head, rest)) = line.split_once(char::is_whitespace) else {
        return LineKind::Malformed;
    };
    let rest = rest.trim_start();
    if rest.is_empty() {
        return LineKind::Malformed;
    }

    match head {
        TYPE_KEYWORD => LineKind::Directive(Directive::Type(collapse_whitespace(rest))),
        NAMESPACE_KEYWORD => LineKind::Directive(Directive::Namespace(collapse_whitespace(rest))),
        USING_KEYWORD => LineKind::Directive(Directive::Using(collapse_whitespace(rest))),
        ty => {
            let name = rest.split_whitespace().next().unwrap_or_default();
            LineKind::Field {
                ty: ty.to_string(),
                name: name.to_string(),
            }
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "line/line_tests.rs"]
mod line_tests;
