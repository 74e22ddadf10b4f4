//! Identifier normalization.
//!
//! DSL component names are hierarchical (`Za/IconButton`, `forms/text-field`)
//! and have to become call identifiers in the target language. Screen names
//! are free-form titles that become a type or function name.

/// Fallback call identifier when a component name has no usable segment.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Fallback screen identifier when the document name is empty or absent.
pub const DEFAULT_SCREEN_NAME: &str = "GeneratedScreen";

const PATH_SEPARATOR: char = '/';

fn is_word_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split into segments and words, keep the very first word as written and
/// capitalize the first letter of every following word.
fn camel_join(identifier: &str) -> String {
    identifier
        .split(PATH_SEPARATOR)
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .flat_map(|segment| segment.split(is_word_separator))
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(i, word)| if i == 0 { word.to_string() } else { capitalize(word) })
        .collect()
}

/// Call identifier for the Compose backend.
///
/// `Za/IconButton` becomes `ZaIconButton`, `forms/text-field` becomes
/// `formsTextField`.
pub fn compose_name(identifier: &str) -> String {
    let joined = camel_join(identifier);
    if joined.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        joined
    }
}

/// Call identifier for the SwiftUI backend.
///
/// Same joining rule as [`compose_name`], then every non-alphanumeric
/// character is dropped and a leading digit is escaped with `_`.
pub fn swift_name(identifier: &str) -> String {
    let stripped: String = camel_join(identifier)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();

    if stripped.is_empty() {
        return UNKNOWN_NAME.to_string();
    }
    if stripped.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{stripped}")
    } else {
        stripped
    }
}

/// Type/function name for a screen, derived from its display name.
pub fn screen_name(raw: &str) -> String {
    let name: String = raw
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if name.is_empty() {
        DEFAULT_SCREEN_NAME.to_string()
    } else {
        name
    }
}
