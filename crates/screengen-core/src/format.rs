//! Value formatters shared by every backend.
//!
//! All functions here are pure and infallible. A formatter that has nothing to
//! say returns `None`, and callers omit the corresponding fragment entirely.

use crate::node::PropValue;

/// One level of indentation in generated code.
pub const INDENT_UNIT: &str = "  ";

/// Opening delimiter of an embedded expression.
pub const EXPR_OPEN: &str = "{{";

/// Closing delimiter of an embedded expression.
pub const EXPR_CLOSE: &str = "}}";

/// Whitespace for the given nesting level.
pub fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Round half to even, the way layout values are snapped to integers.
///
/// `10.5` becomes `10`, `11.5` becomes `12`.
pub fn round_to_int(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Format a length with the backend's unit suffix.
///
/// Absent values and an exact zero produce `None`: zero-length constraints are
/// elided rather than emitted.
pub fn format_length(value: Option<f64>, unit: &str) -> Option<String> {
    let value = value?;
    if value == 0.0 {
        return None;
    }
    Some(format!("{}{}", round_to_int(value), unit))
}

/// Extract the inner text of an expression-delimited string.
///
/// `"{{ item.name }}"` yields `Some("item.name")`; anything not wrapped in the
/// delimiter pair yields `None`.
pub fn expression(raw: &str) -> Option<&str> {
    let inner = raw.strip_prefix(EXPR_OPEN)?.strip_suffix(EXPR_CLOSE)?;
    Some(inner.trim())
}

/// Quote a string literal, escaping only the quote character.
pub fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}

/// Format one component argument as `key<separator>value`.
///
/// Unsupported values become an inert comment so a single bad prop never
/// aborts the surrounding call.
pub fn format_prop(key: &str, value: &PropValue, separator: &str) -> String {
    match value {
        PropValue::Bool(b) => format!("{key}{separator}{b}"),
        PropValue::Number(n) => format!("{key}{separator}{}", round_to_int(*n)),
        PropValue::String(s) => match expression(s) {
            Some(expr) => format!("{key}{separator}{expr}"),
            None => format!("{key}{separator}{}", quote(s)),
        },
        PropValue::Unsupported => {
            log::warn!("unsupported value for prop '{key}'");
            format!("/* unsupported prop {key} */")
        }
    }
}
