//! C# message generation.

use super::placeholder_text;
use crate::config::Target;
use crate::model::{
    GeneratedClass, ImportKind, MESSAGE_INTERFACE, MESSAGE_MODULE, Member,
};
use crate::normalize::timestamp_field;

const INDENT: &str = "    ";

/// Generate the C# source for a message.
pub fn render_csharp(class: &GeneratedClass) -> String {
    let mut code = String::new();

    // Capability import, then the file's own namespaces and imports
    code.push_str(&format!("using {MESSAGE_MODULE};\n"));
    code.push('\n');
    for import in &class.imports {
        match import.kind {
            ImportKind::Namespace => code.push_str(&format!("namespace {};\n", import.name)),
            ImportKind::Using => code.push_str(&format!("using {};\n", import.name)),
        }
        code.push('\n');
    }

    code.push_str(&format!(
        "public {} {} : {}\n",
        class.kind.as_str(),
        class.name,
        MESSAGE_INTERFACE
    ));
    code.push_str("{\n");

    code.push_str(&format!(
        "{INDENT}public DateTime {} {{ get; set; }} = DateTime.UtcNow;\n",
        timestamp_field(Target::CSharp)
    ));
    code.push('\n');

    for member in &class.members {
        match member {
            Member::Field(field) => {
                if !field.docs.is_empty() {
                    code.push_str(&format!("{INDENT}/// <summary>\n"));
                    for doc in &field.docs {
                        code.push_str(&doc_line(doc));
                    }
                    code.push_str(&format!("{INDENT}/// </summary>\n"));
                }
                code.push_str(&format!("{INDENT}public {} {};\n", field.ty, field.name));
                code.push('\n');
            }
            Member::Invalid { line } => {
                code.push_str(&format!("{INDENT}// {}\n", placeholder_text(*line)));
            }
        }
    }

    code.push_str(&format!("{INDENT}public {}(){{}}\n", class.name));
    code.push_str("}\n");

    code
}

fn doc_line(doc: &str) -> String {
    if doc.is_empty() {
        format!("{INDENT}///\n")
    } else {
        format!("{INDENT}/// {doc}\n")
    }
}
