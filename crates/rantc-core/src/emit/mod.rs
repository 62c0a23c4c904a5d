//! Source emitters.
//!
//! Each emitter is a pure function of a [`GeneratedClass`]: the same model always
//! renders to byte-identical text.
//!
//! # Supported Targets
//!
//! - **C#** ([`csharp`]): `public <kind> <Name> : IMessage` with public fields and
//!   `/// <summary>` documentation
//! - **Python** ([`python`]): `@dataclass class <Name>(IMessage)` with typed
//!   attributes and `#:` documentation

pub mod csharp;
pub mod python;

use crate::config::Target;
use crate::model::GeneratedClass;

pub use csharp::render_csharp;
pub use python::render_python;

/// Render a class for the given target.
pub fn render(target: Target, class: &GeneratedClass) -> String {
    match target {
        Target::CSharp => render_csharp(class),
        Target::Python => render_python(class),
    }
}

/// Text of the placeholder left where a malformed line was skipped
pub(crate) fn placeholder_text(line: usize) -> String {
    format!("Message line {line} is invalid. Skipped.")
}
