//! Type and identifier normalization per target.
//!
//! # Type Mappings
//!
//! | Definition | C# | Python |
//! |------------|----|--------|
//! | `float64` / `Float64` | `double` | `float` |
//! | `float32` / `Float32` | `float` | `float` |
//! | `int32` / `Int32` | `int` | `int` |
//! | `int64` / `Int64` | `long` | `int` |
//! | `String` / `string` | `string` | `str` |
//! | `geometry_msgs/Vector3`, `Point`, `Point32` | `Vector3` | `Vector3` |
//! | `geometry_msgs/Quaternion` | `Quaternion` | `Quaternion` |
//! | `geometry_msgs/Transform`, `Pose` | `Transform` | `Transform` |
//!
//! Unmapped types pass through unchanged, apart from dropping any `pkg/` prefix.
//! Python applies its own coarser table on top of the C# one, collapsing every
//! integer width to `int` and every floating type to `float`.

use crate::config::Target;
use crate::model::{FieldDecl, GeneratedClass, Member, ParsedDefinition};

/// C# keywords that need the `@` verbatim prefix when used as identifiers
pub const CSHARP_RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Python keywords that get a trailing underscore when used as identifiers
pub const PYTHON_RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Look up a definition type in the C# alias table.
pub fn csharp_alias(ty: &str) -> Option<&'static str> {
    let mapped = match ty {
        "float64" | "Float64" => "double",
        "float32" | "Float32" => "float",
        "int32" | "Int32" => "int",
        "int64" | "Int64" => "long",
        "String" => "string",
        "geometry_msgs/Vector3" | "geometry_msgs/Point" | "geometry_msgs/Point32" => "Vector3",
        "geometry_msgs/Quaternion" => "Quaternion",
        "geometry_msgs/Transform" | "geometry_msgs/Pose" => "Transform",
        _ => return None,
    };
    Some(mapped)
}

/// Look up a C# type in the Python category table.
pub fn python_alias(ty: &str) -> Option<&'static str> {
    let mapped = match ty {
        "string" | "char" => "str",
        "byte" | "sbyte" | "short" | "ushort" | "uint" | "long" | "ulong" => "int",
        "double" | "decimal" => "float",
        _ => return None,
    };
    Some(mapped)
}

/// Check whether `name` is reserved in the target language.
pub fn is_reserved(target: Target, name: &str) -> bool {
    match target {
        Target::CSharp => CSHARP_RESERVED_WORDS.contains(&name),
        Target::Python => PYTHON_RESERVED_WORDS.contains(&name),
    }
}

/// Name of the creation-time member every generated class starts with.
pub fn timestamp_field(target: Target) -> &'static str {
    match target {
        Target::CSharp => "Timestamp",
        Target::Python => "timestamp",
    }
}

/// Drop a `pkg/` style namespace prefix.
fn strip_path_prefix(ty: &str) -> &str {
    ty.rsplit('/').next().unwrap_or(ty)
}

/// Maps parsed fields to target-valid types and identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    target: Target,
}

impl Normalizer {
    pub fn for_target(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Resolve aliases and strip `pkg/` prefixes.
    pub fn normalize_type(&self, ty: &str) -> String {
        let aliased = csharp_alias(ty).unwrap_or(ty);
        let stripped = strip_path_prefix(aliased);
        match self.target {
            Target::CSharp => stripped.to_string(),
            Target::Python => python_alias(stripped).unwrap_or(stripped).to_string(),
        }
    }

    /// True when a field would shadow the synthesized timestamp member.
    pub fn collides_with_timestamp(&self, name: &str) -> bool {
        name == timestamp_field(self.target)
    }

    /// Escape an identifier that collides with a reserved word.
    ///
    /// A field named like the timestamp member gets a trailing underscore.
    pub fn escape_identifier(&self, name: &str) -> String {
        if self.collides_with_timestamp(name) {
            return format!("{name}_");
        }
        if !is_reserved(self.target, name) {
            return name.to_string();
        }
        match self.target {
            Target::CSharp => format!("@{name}"),
            Target::Python => format!("{name}_"),
        }
    }

    /// Build the render model for this target.
    pub fn normalize(&self, definition: &ParsedDefinition) -> GeneratedClass {
        let members = definition
            .members
            .iter()
            .map(|member| match member {
                Member::Field(field) => Member::Field(FieldDecl {
                    line: field.line,
                    ty: self.normalize_type(&field.ty),
                    name: self.escape_identifier(&field.name),
                    docs: field.docs.clone(),
                }),
                Member::Invalid { line } => Member::Invalid { line: *line },
            })
            .collect();

        GeneratedClass {
            name: definition.name.clone(),
            kind: definition.kind,
            imports: definition.imports.clone(),
            members,
        }
    }
}
