//! Parser → Normalizer → Emitter pipeline for a single definition

use crate::config::{CompilerConfig, Target};
use crate::diagnostic::{Diagnostic, Severity};
use crate::emit;
use crate::model::{DefinitionKind, ParsedDefinition};
use crate::normalize::Normalizer;
use crate::parser::parse;

/// Generated source for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub target: Target,
    /// `<MessageName>.<extension>`
    pub file_name: String,
    pub contents: String,
}

/// Result of compiling one definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMessage {
    pub name: String,
    pub kind: DefinitionKind,
    /// One entry per enabled target, in emission order
    pub files: Vec<GeneratedFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledMessage {
    /// Output for a target, if it was enabled
    pub fn file(&self, target: Target) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.target == target)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Compile definition text into source for every enabled target.
///
/// Parsing happens once; each target gets its own normalized model and emitter.
pub fn compile_source(message_name: &str, text: &str, config: &CompilerConfig) -> CompiledMessage {
    let mut definition = parse(message_name, text);

    let files = config
        .enabled_targets()
        .into_iter()
        .map(|target| {
            let normalizer = Normalizer::for_target(target);
            warn_timestamp_collisions(normalizer, &mut definition);
            let class = normalizer.normalize(&definition);
            GeneratedFile {
                target,
                file_name: format!("{}.{}", definition.name, target.extension()),
                contents: emit::render(target, &class),
            }
        })
        .collect();

    CompiledMessage {
        name: definition.name,
        kind: definition.kind,
        files,
        diagnostics: definition.diagnostics,
    }
}

/// Record a warning for each field renamed away from the timestamp member.
fn warn_timestamp_collisions(normalizer: Normalizer, definition: &mut ParsedDefinition) {
    let target = normalizer.target();
    let renamed: Vec<(usize, String)> = definition
        .fields()
        .filter(|field| normalizer.collides_with_timestamp(&field.name))
        .map(|field| (field.line, field.name.clone()))
        .collect();

    for (line, name) in renamed {
        let message = format!(
            "field '{name}' collides with the generated timestamp; renamed to '{name}_' in {target} output"
        );
        tracing::warn!(definition = %definition.name, line, "{}", message);
        definition.diagnostics.push(Diagnostic::warning(Some(line), message));
    }
}
