//! Relaxed JSON writer.
//!
//! Output follows JSON5 conventions: keys that are valid identifiers are left
//! bare, strings use whichever quote character needs less escaping (single
//! quotes on a tie), floats keep their fraction so they read back as floats,
//! and nested containers are broken across lines when an indent is requested.

use crate::parse::{is_identifier_part, is_identifier_start};
use serde_json::{Number, Value};

/// Indentation is capped at ten spaces per level.
const MAX_INDENT: usize = 10;

/// Write `value` as compact relaxed JSON.
#[inline]
pub fn to_string(value: &Value) -> String {
    to_string_pretty(value, 0)
}

/// Write `value` as relaxed JSON, indenting nested entries by `indent`
/// spaces per level. An indent of zero writes everything on one line.
pub fn to_string_pretty(value: &Value, indent: usize) -> String {
    let gap = " ".repeat(indent.min(MAX_INDENT));
    let mut out = String::with_capacity(64);
    write_value(&mut out, value, &gap, 0);
    out
}

fn write_value(out: &mut String, value: &Value, gap: &str, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => out.push_str(&quote_string(s)),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, gap, depth + 1);
                write_value(out, item, gap, depth + 1);
            }
            newline(out, gap, depth);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, gap, depth + 1);
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    out.push_str(&quote_string(key));
                }
                out.push(':');
                if !gap.is_empty() {
                    out.push(' ');
                }
                write_value(out, item, gap, depth + 1);
            }
            newline(out, gap, depth);
            out.push('}');
        }
    }
}

#[inline]
fn newline(out: &mut String, gap: &str, depth: usize) {
    if gap.is_empty() {
        return;
    }
    out.push('\n');
    for _ in 0..depth {
        out.push_str(gap);
    }
}

/// Numbers keep their kind: floats always carry a fraction or exponent, so
/// the text reads back as the same [`Number`].
#[inline]
fn write_number(out: &mut String, n: &Number) {
    out.push_str(&n.to_string());
}

/// A number the way a browser prints it: integral floats lose their
/// fraction and negative zero is `0`.
///
/// ```
/// use maquette_relief::number_to_string;
/// use serde_json::Number;
///
/// assert_eq!(number_to_string(&Number::from(7)), "7");
/// assert_eq!(number_to_string(&Number::from_f64(4.0).unwrap()), "4");
/// ```
pub fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }

    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

/// Whether `key` can be written without quotes.
#[inline]
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

/// Quote and escape a string.
///
/// ```
/// use maquette_relief::quote_string;
///
/// assert_eq!(quote_string("plain"), "'plain'");
/// assert_eq!(quote_string("it's"), "\"it's\"");
/// ```
pub fn quote_string(s: &str) -> String {
    let singles = s.matches('\'').count();
    let doubles = s.matches('"').count();
    let quote = if singles <= doubles { '\'' } else { '"' };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);

    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            '\0' => {
                if chars.peek().is_some_and(|n| n.is_ascii_digit()) {
                    out.push_str("\\x00");
                } else {
                    out.push_str("\\0");
                }
            }
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }

    out.push(quote);
    out
}
