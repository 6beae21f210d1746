//! Helpers for reading descriptor values the way a browser would.

use serde_json::Value;

/// Whether a value means "remove the attribute": `null` or the text `"null"`.
#[inline]
pub fn is_null_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s == "null",
        _ => false,
    }
}

/// Browser truthiness: `false`, `null`, `0` and `""` are falsy.
#[inline]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Plain string form of a value, as string interpolation would produce it.
///
/// Arrays join their items with `,` and objects become `[object Object]`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => maquette_relief::number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // Nullish items print as empty strings inside arrays
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
