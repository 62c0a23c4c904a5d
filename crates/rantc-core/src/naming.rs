//! Naming convention utilities for generated messages.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `my message` | [`to_pascal_case`] | `MyMessage` |
//! | `word` | [`capitalize`] | `Word` |
//! | `dir/my message.msg` | [`message_name_from_path`] | `MyMessage` |

use std::path::Path;

/// Convert a space separated file stem to PascalCase.
///
/// Each space separated segment gets its first character upper-cased and the
/// segments are joined with no separator. The rest of every segment is kept as is.
///
/// # Examples
///
/// ```
/// use rantc_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("my message"), "MyMessage");
/// assert_eq!(to_pascal_case("pose_stamped"), "Pose_stamped");
/// assert_eq!(to_pascal_case("Test"), "Test");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(' ').map(capitalize).collect()
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use rantc_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Derive a message name from a definition file path.
///
/// Uses the file name with its extension stripped, converted with
/// [`to_pascal_case`]. Returns `None` when the path has no usable stem.
pub fn message_name_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let name = to_pascal_case(stem);
    if name.is_empty() { None } else { Some(name) }
}
