//! Python dataclass generation.
//!
//! Namespace and using declarations have no Python counterpart and are not rendered.

use super::placeholder_text;
use crate::config::Target;
use crate::model::{GeneratedClass, MESSAGE_INTERFACE, Member};
use crate::normalize::timestamp_field;

const INDENT: &str = "    ";

/// Python module providing the message capability
pub const PYTHON_MESSAGE_MODULE: &str = "rant.messages";

/// Generate the Python source for a message.
pub fn render_python(class: &GeneratedClass) -> String {
    let mut code = String::new();

    code.push_str("from __future__ import annotations\n");
    code.push('\n');
    code.push_str("from dataclasses import dataclass, field\n");
    code.push_str("from datetime import datetime, timezone\n");
    code.push_str("from typing import Optional\n");
    code.push('\n');
    code.push_str(&format!(
        "from {PYTHON_MESSAGE_MODULE} import {MESSAGE_INTERFACE}\n"
    ));
    code.push_str("\n\n");

    code.push_str("@dataclass\n");
    code.push_str(&format!("class {}({}):\n", class.name, MESSAGE_INTERFACE));
    code.push_str(&format!(
        "{INDENT}{}: datetime = field(default_factory=lambda: datetime.now(timezone.utc))\n",
        timestamp_field(Target::Python)
    ));

    for member in &class.members {
        code.push('\n');
        match member {
            Member::Field(field) => {
                for doc in &field.docs {
                    if doc.is_empty() {
                        code.push_str(&format!("{INDENT}#:\n"));
                    } else {
                        code.push_str(&format!("{INDENT}#: {doc}\n"));
                    }
                }
                code.push_str(&format!(
                    "{INDENT}{}: {}\n",
                    field.name,
                    annotation_with_default(&field.ty)
                ));
            }
            Member::Invalid { line } => {
                code.push_str(&format!("{INDENT}# {}\n", placeholder_text(*line)));
            }
        }
    }

    code
}

/// Annotation and default value for a normalized Python type.
fn annotation_with_default(ty: &str) -> String {
    match ty {
        "int" => "int = 0".to_string(),
        "float" => "float = 0.0".to_string(),
        "str" => "str = \"\"".to_string(),
        "bool" => "bool = False".to_string(),
        other => format!("Optional[{other}] = None"),
    }
}
