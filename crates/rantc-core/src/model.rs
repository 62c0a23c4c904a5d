//! Parsed and normalized representations of a message definition.
//!
//! The parser produces a [`ParsedDefinition`] holding raw field types and names.
//! The [`Normalizer`](crate::Normalizer) turns it into a [`GeneratedClass`] for one
//! target, which the emitters render verbatim.

use crate::diagnostic::Diagnostic;
use crate::error::CompileError;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Module every generated message imports for the message capability
pub const MESSAGE_MODULE: &str = "Rant.Messages";

/// Capability interface every generated message implements
pub const MESSAGE_INTERFACE: &str = "IMessage";

/// Suffix appended to the argument of a `namespace` directive
pub const NAMESPACE_SUFFIX: &str = ".Messages";

/// Structural category requested with the `type` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefinitionKind {
    Class,
    Record,
    Struct,
    RecordClass,
    #[default]
    RecordStruct,
}

impl DefinitionKind {
    pub const ALL: [DefinitionKind; 5] = [
        DefinitionKind::Class,
        DefinitionKind::Record,
        DefinitionKind::Struct,
        DefinitionKind::RecordClass,
        DefinitionKind::RecordStruct,
    ];

    /// Keyword(s) as written in both the directive and C# output
    pub fn as_str(self) -> &'static str {
        match self {
            DefinitionKind::Class => "class",
            DefinitionKind::Record => "record",
            DefinitionKind::Struct => "struct",
            DefinitionKind::RecordClass => "record class",
            DefinitionKind::RecordStruct => "record struct",
        }
    }

    /// Comma separated list of every accepted kind, for error messages
    pub fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefinitionKind {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CompileError::UnknownDefinitionKind {
                found: s.to_string(),
                expected: Self::expected_list(),
            })
    }
}

/// How an import is declared in the generated source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// File-scoped namespace declaration
    Namespace,
    /// Using/import of another namespace
    Using,
}

/// A namespace declaration or import collected while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub kind: ImportKind,
    /// Fully formed name (namespace suffix already applied)
    pub name: String,
}

impl Import {
    pub fn namespace(name: impl Into<String>) -> Self {
        Self {
            kind: ImportKind::Namespace,
            name: name.into(),
        }
    }

    pub fn using(name: impl Into<String>) -> Self {
        Self {
            kind: ImportKind::Using,
            name: name.into(),
        }
    }
}

/// Names already declared or imported by one file
///
/// Seeded with [`MESSAGE_MODULE`], which the emitters always import.
#[derive(Debug, Clone)]
pub struct NamespaceSet {
    names: HashSet<String>,
}

impl NamespaceSet {
    pub fn new() -> Self {
        let mut names = HashSet::new();
        names.insert(MESSAGE_MODULE.to_string());
        Self { names }
    }

    /// Record a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

}

impl Default for NamespaceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A field declaration with its attached documentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// 1-based source line
    pub line: usize,
    pub ty: String,
    pub name: String,
    /// Comment lines that preceded the field
    pub docs: Vec<String>,
}

/// One entry of a message body, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(FieldDecl),
    /// A malformed line, rendered as a placeholder comment
    Invalid { line: usize },
}

impl Member {
    pub fn as_field(&self) -> Option<&FieldDecl> {
        match self {
            Member::Field(field) => Some(field),
            Member::Invalid { .. } => None,
        }
    }
}

/// Output of the parser: raw, target independent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDefinition {
    pub name: String,
    pub kind: DefinitionKind,
    pub imports: Vec<Import>,
    pub members: Vec<Member>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedDefinition {
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(Member::as_field)
    }
}

/// Render model for one target
///
/// Emitters always render the creation-time field first, ahead of `members`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub name: String,
    pub kind: DefinitionKind,
    pub imports: Vec<Import>,
    pub members: Vec<Member>,
}

impl GeneratedClass {
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(Member::as_field)
    }
}
