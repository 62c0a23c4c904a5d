//! Two-pass parser for definition files
//!
//! # Pass 1: metadata
//!
//! Directive lines are consumed and removed from the line sequence:
//!
//! - `type <kind>` selects the [`DefinitionKind`]. An unknown kind is reported as an
//!   error and the line is dropped, leaving the kind unchanged.
//! - `namespace <name>` declares `<name>.Messages`.
//! - `using <name>` imports `<name>`.
//!
//! A namespace or import already recorded for the file is reported as a warning and
//! skipped. Field types qualified with `.` (`Geometry.Vector3`) import their prefix and
//! keep only the last segment.
//!
//! # Pass 2: fields and comments
//!
//! Remaining lines are walked in order. Comment lines accumulate into a documentation
//! block that attaches to the next field. Malformed lines become placeholders so line
//! numbers stay traceable in the output.

use crate::diagnostic::Diagnostic;
use crate::line::{Directive, Line, LineKind, tokenize};
use crate::model::{
    DefinitionKind, FieldDecl, Import, Member, NAMESPACE_SUFFIX, NamespaceSet, ParsedDefinition,
};

/// Parse definition text for the message `message_name`.
///
/// Never fails: every problem becomes a [`Diagnostic`] on the returned definition and
/// is logged when found.
pub fn parse(message_name: &str, text: &str) -> ParsedDefinition {
    let mut parser = Parser::new(message_name);
    let mut lines = tokenize(text);

    lines.retain_mut(|line| parser.extract_metadata(line));
    let members = parser.aggregate(lines);

    ParsedDefinition {
        name: parser.name,
        kind: parser.kind,
        imports: parser.imports,
        members,
        diagnostics: parser.diagnostics,
    }
}

struct Parser {
    name: String,
    kind: DefinitionKind,
    imports: Vec<Import>,
    namespaces: NamespaceSet,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: DefinitionKind::default(),
            imports: Vec::new(),
            namespaces: NamespaceSet::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Pass 1. Returns whether the line stays in the sequence.
    fn extract_metadata(&mut self, line: &mut Line) -> bool {
        match &mut line.kind {
            LineKind::Directive(Directive::Type(argument)) => {
                match argument.parse::<DefinitionKind>() {
                    Ok(kind) => self.kind = kind,
                    Err(e) => self.error(line.number, e.to_string()),
                }
                false
            }
            LineKind::Directive(Directive::Namespace(argument)) => {
                let namespace = format!("{argument}{NAMESPACE_SUFFIX}");
                if self.namespaces.insert(&namespace) {
                    self.imports.push(Import::namespace(namespace));
                } else {
                    let message = format!("skipping duplicate namespace {argument}");
                    self.warn(line.number, message);
                }
                false
            }
            LineKind::Directive(Directive::Using(argument)) => {
                if self.namespaces.insert(argument) {
                    self.imports.push(Import::using(argument.clone()));
                } else {
                    let message = format!("skipping duplicate namespace {argument}");
                    self.warn(line.number, message);
                }
                false
            }
            LineKind::Field { ty, .. } => {
                if let Some((prefix, last)) = ty.rsplit_once('.') {
                    // `Geo.` has no type name, the line is reported as malformed
                    if !prefix.is_empty() && !last.is_empty() {
                        if self.namespaces.insert(prefix) {
                            self.imports.push(Import::using(prefix));
                        } else {
                            tracing::debug!(
                                definition = %self.name,
                                line = line.number,
                                "namespace {} already imported",
                                prefix
                            );
                        }
                    }
                    *ty = last.to_string();
                }
                true
            }
            LineKind::Comment(_) | LineKind::Malformed => true,
        }
    }

    /// Pass 2. Builds the ordered member list from the remaining lines.
    fn aggregate(&mut self, lines: Vec<Line>) -> Vec<Member> {
        let mut members = Vec::with_capacity(lines.len());
        let mut docs: Vec<String> = Vec::new();

        for line in lines {
            match line.kind {
                LineKind::Comment(text) => docs.push(text),
                LineKind::Field { ty, name } if !ty.is_empty() && !name.is_empty() => {
                    members.push(Member::Field(FieldDecl {
                        line: line.number,
                        ty,
                        name,
                        docs: std::mem::take(&mut docs),
                    }));
                }
                LineKind::Field { .. } | LineKind::Malformed => {
                    self.warn(
                        line.number,
                        format!("skipping line {} - type or name is empty", line.number),
                    );
                    members.push(Member::Invalid { line: line.number });
                }
                // consumed by pass 1
                LineKind::Directive(_) => {}
            }
        }

        if !docs.is_empty() {
            self.diagnostics.push(Diagnostic::warning(
                None,
                "dropping trailing comment with no field after it",
            ));
            tracing::warn!(
                definition = %self.name,
                "dropping trailing comment with no field after it"
            );
        }

        members
    }

    fn warn(&mut self, line: usize, message: String) {
        tracing::warn!(definition = %self.name, line, "{}", message);
        self.diagnostics.push(Diagnostic::warning(Some(line), message));
    }

    fn error(&mut self, line: usize, message: String) {
        tracing::error!(definition = %self.name, line, "{}", message);
        self.diagnostics.push(Diagnostic::error(Some(line), message));
    }
}
