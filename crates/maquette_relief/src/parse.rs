//! Relaxed JSON reader.
//!
//! Accepts the JSON5 superset of JSON: unquoted identifier keys, single
//! quoted strings, trailing commas, comments, hexadecimal integers and
//! numbers with a leading or trailing decimal point.

use crate::error::{Json5Error, Json5Result};
use memchr::{memchr2, memchr_iter, memmem, memrchr};
use serde_json::{Map, Number, Value};

/// Parse relaxed JSON text into a [`Value`].
///
/// # Example
///
/// ```
/// use maquette_relief::parse;
///
/// let value = parse("[{name: 'size', value: 'md'},]").unwrap();
/// assert_eq!(value[0]["value"], "md");
/// ```
pub fn parse(source: &str) -> Json5Result<Value> {
    let mut parser = Parser::new(source);
    parser.skip_trivia()?;
    let value = parser.parse_value()?;
    parser.skip_trivia()?;

    match parser.peek() {
        None => Ok(value),
        Some(c) => Err(parser.unexpected(c)),
    }
}

/// Deepest container nesting accepted, the same cap `serde_json` uses.
const MAX_DEPTH: usize = 128;

struct Parser<'a> {
    source: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    #[inline]
    fn new(source: &'a str) -> Self {
        // A leading byte order mark is whitespace
        let pos = if source.starts_with('\u{FEFF}') { 3 } else { 0 };
        Self {
            source,
            pos,
            depth: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    #[inline]
    fn peek_second(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    #[inline]
    fn next_char(&mut self) -> Json5Result<char> {
        self.bump().ok_or_else(|| self.end())
    }

    /// 1-based line and column of a byte offset.
    fn location(&self, pos: usize) -> (u32, u32) {
        let before = &self.source.as_bytes()[..pos];
        let line = memchr_iter(b'\n', before).count() + 1;
        let line_start = memrchr(b'\n', before).map_or(0, |p| p + 1);
        let column = self.source[line_start..pos].chars().count() + 1;
        (line as u32, column as u32)
    }

    fn end(&self) -> Json5Error {
        let (line, column) = self.location(self.source.len());
        Json5Error::UnexpectedEnd { line, column }
    }

    fn unexpected(&self, found: char) -> Json5Error {
        self.unexpected_at(found, self.pos)
    }

    fn unexpected_at(&self, found: char, pos: usize) -> Json5Error {
        let (line, column) = self.location(pos);
        Json5Error::UnexpectedChar {
            found,
            line,
            column,
        }
    }

    fn invalid_escape(&self, pos: usize) -> Json5Error {
        let (line, column) = self.location(pos);
        Json5Error::InvalidEscape { line, column }
    }

    fn expect(&mut self, expected: char) -> Json5Result<()> {
        let at = self.pos;
        match self.next_char()? {
            c if c == expected => Ok(()),
            c => Err(self.unexpected_at(c, at)),
        }
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> Json5Result<()> {
        let source = self.source;
        let bytes = source.as_bytes();

        loop {
            match self.peek() {
                Some(c) if is_space(c) => self.pos += c.len_utf8(),
                Some('/') => match self.peek_second() {
                    Some('/') => {
                        self.pos = memchr2(b'\n', b'\r', &bytes[self.pos..])
                            .map_or(bytes.len(), |offset| self.pos + offset);
                    }
                    Some('*') => {
                        let start = self.pos;
                        let Some(offset) = memmem::find(&bytes[start + 2..], b"*/") else {
                            let (line, column) = self.location(start);
                            return Err(Json5Error::UnterminatedComment { line, column });
                        };
                        self.pos = start + 2 + offset + 2;
                    }
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    fn parse_value(&mut self) -> Json5Result<Value> {
        let Some(c) = self.peek() else {
            return Err(self.end());
        };

        match c {
            '{' => self.nested(Self::parse_object),
            '[' => self.nested(Self::parse_array),
            '"' | '\'' => self.parse_string().map(Value::String),
            '-' | '+' | '.' | '0'..='9' => self.parse_number(),
            c if is_identifier_start(c) => self.parse_literal(),
            c => Err(self.unexpected(c)),
        }
    }

    /// Run a container parser one level deeper.
    fn nested(&mut self, parse: fn(&mut Self) -> Json5Result<Value>) -> Json5Result<Value> {
        if self.depth >= MAX_DEPTH {
            let (line, column) = self.location(self.pos);
            return Err(Json5Error::RecursionLimit { line, column });
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn parse_object(&mut self) -> Json5Result<Value> {
        self.expect('{')?;
        let mut map = Map::new();

        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.pos += 1;
                return Ok(Value::Object(map));
            }

            let key = self.parse_key()?;
            self.skip_trivia()?;
            self.expect(':')?;
            self.skip_trivia()?;
            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_trivia()?;
            let at = self.pos;
            match self.next_char()? {
                ',' => continue,
                '}' => return Ok(Value::Object(map)),
                c => return Err(self.unexpected_at(c, at)),
            }
        }
    }

    fn parse_array(&mut self) -> Json5Result<Value> {
        self.expect('[')?;
        let mut items = Vec::new();

        loop {
            self.skip_trivia()?;
            if self.peek() == Some(']') {
                self.pos += 1;
                return Ok(Value::Array(items));
            }

            items.push(self.parse_value()?);

            self.skip_trivia()?;
            let at = self.pos;
            match self.next_char()? {
                ',' => continue,
                ']' => return Ok(Value::Array(items)),
                c => return Err(self.unexpected_at(c, at)),
            }
        }
    }

    fn parse_key(&mut self) -> Json5Result<String> {
        match self.peek() {
            Some('"' | '\'') => self.parse_string(),
            Some(c) if is_identifier_start(c) => Ok(self.parse_identifier().to_string()),
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.end()),
        }
    }

    #[inline]
    fn parse_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_identifier_part(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.source[start..self.pos]
    }

    /// `true`, `false`, `null`, `Infinity` and `NaN`.
    fn parse_literal(&mut self) -> Json5Result<Value> {
        let start = self.pos;
        match self.parse_identifier() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            literal @ ("Infinity" | "NaN") => Err(self.unrepresentable(literal, start)),
            word => {
                let found = word.chars().next().unwrap_or_default();
                Err(self.unexpected_at(found, start))
            }
        }
    }

    fn unrepresentable(&self, literal: &str, pos: usize) -> Json5Error {
        let (line, column) = self.location(pos);
        Json5Error::UnrepresentableNumber {
            literal: literal.to_string(),
            line,
            column,
        }
    }

    fn invalid_number(&self, start: usize) -> Json5Error {
        let (line, column) = self.location(start);
        let end = self.pos.max(start + 1).min(self.source.len());
        Json5Error::InvalidNumber {
            literal: self.source[start..end].to_string(),
            line,
            column,
        }
    }

    fn parse_number(&mut self) -> Json5Result<Value> {
        let start = self.pos;
        let negative = match self.peek() {
            Some('-') => {
                self.pos += 1;
                true
            }
            Some('+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };

        match self.peek() {
            Some(c) if is_identifier_start(c) => {
                let word = self.parse_identifier();
                return match word {
                    "Infinity" | "NaN" => Err(self.unrepresentable(&self.source[start..self.pos], start)),
                    _ => Err(self.unexpected_at(c, self.pos - word.len())),
                };
            }
            Some('0') if matches!(self.peek_second(), Some('x' | 'X')) => {
                return self.parse_hex(start, negative);
            }
            _ => {}
        }

        let int_start = self.pos;
        let int_digits = self.skip_digits();
        if int_digits > 1 && self.source.as_bytes()[int_start] == b'0' {
            return Err(self.invalid_number(start));
        }

        let mut is_float = false;
        let mut frac_digits = 0;
        if self.peek() == Some('.') {
            self.pos += 1;
            is_float = true;
            frac_digits = self.skip_digits();
        }

        if int_digits == 0 && frac_digits == 0 {
            return Err(self.invalid_number(start));
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.pos += 1;
            is_float = true;
            if matches!(self.peek(), Some('+' | '-')) {
                self.pos += 1;
            }
            if self.skip_digits() == 0 {
                return Err(self.invalid_number(start));
            }
        }

        let literal = &self.source[start..self.pos];
        let literal = literal.strip_prefix('+').unwrap_or(literal);

        if !is_float {
            if let Ok(n) = literal.parse::<i64>() {
                return Ok(Value::from(n));
            }
            if let Ok(n) = literal.parse::<u64>() {
                return Ok(Value::from(n));
            }
        }

        let float: f64 = literal.parse().map_err(|_| self.invalid_number(start))?;
        Number::from_f64(float)
            .map(Value::Number)
            .ok_or_else(|| self.unrepresentable(literal, start))
    }

    fn parse_hex(&mut self, start: usize, negative: bool) -> Json5Result<Value> {
        // Skip "0x"
        self.pos += 2;
        let digits_start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.pos += 1;
        }

        let digits = &self.source[digits_start..self.pos];
        let magnitude =
            u64::from_str_radix(digits, 16).map_err(|_| self.invalid_number(start))?;

        if !negative {
            return Ok(Value::from(magnitude));
        }
        match i64::try_from(magnitude) {
            Ok(n) => Ok(Value::from(-n)),
            Err(_) => Number::from_f64(-(magnitude as f64))
                .map(Value::Number)
                .ok_or_else(|| self.invalid_number(start)),
        }
    }

    #[inline]
    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        let bytes = self.source.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        self.pos - start
    }

    fn parse_string(&mut self) -> Json5Result<String> {
        let quote = self.next_char()?;
        let source = self.source;
        let bytes = source.as_bytes();
        let mut out = String::new();

        loop {
            // Copy the run up to the next quote or escape in one go
            let Some(offset) = memchr2(quote as u8, b'\\', &bytes[self.pos..]) else {
                return Err(self.end());
            };
            let chunk = &source[self.pos..self.pos + offset];
            if let Some(newline) = memchr2(b'\n', b'\r', chunk.as_bytes()) {
                let at = self.pos + newline;
                return Err(self.unexpected_at(bytes[at] as char, at));
            }
            out.push_str(chunk);
            self.pos += offset;

            if self.next_char()? == quote {
                return Ok(out);
            }
            self.parse_escape(&mut out)?;
        }
    }

    /// Parse the escape following a backslash.
    fn parse_escape(&mut self, out: &mut String) -> Json5Result<()> {
        let at = self.pos - 1;

        match self.next_char()? {
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{b}'),
            '0' => {
                if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    return Err(self.invalid_escape(at));
                }
                out.push('\0');
            }
            '1'..='9' => return Err(self.invalid_escape(at)),
            'x' => {
                let code = self.hex_code(2, at)?;
                out.push(char::from_u32(code).ok_or_else(|| self.invalid_escape(at))?);
            }
            'u' => {
                let high = self.hex_code(4, at)?;
                out.push(self.unicode_escape(high, at)?);
            }
            // Line continuations
            '\r' => {
                if self.peek() == Some('\n') {
                    self.pos += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }

        Ok(())
    }

    /// Resolve a `\uXXXX` escape, joining surrogate pairs.
    fn unicode_escape(&mut self, high: u32, at: usize) -> Json5Result<char> {
        if !(0xD800..0xDC00).contains(&high) {
            return Ok(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER));
        }

        if !self.source[self.pos..].starts_with("\\u") {
            return Ok(char::REPLACEMENT_CHARACTER);
        }
        let saved = self.pos;
        self.pos += 2;
        let low = self.hex_code(4, at)?;
        if (0xDC00..0xE000).contains(&low) {
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
        }

        // Lone high surrogate: leave the following escape for the next round
        self.pos = saved;
        Ok(char::REPLACEMENT_CHARACTER)
    }

    fn hex_code(&mut self, len: usize, at: usize) -> Json5Result<u32> {
        let mut code = 0;
        for _ in 0..len {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.invalid_escape(at))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }
}

#[inline]
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[inline]
pub(crate) fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

#[inline]
pub(crate) fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_alphanumeric() || c == '\u{200C}' || c == '\u{200D}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_json() {
        let value = parse(r#"{"a": [1, 2.5, true, false, null], "b": "x"}"#).unwrap();
        assert_eq!(value, json!({"a": [1, 2.5, true, false, null], "b": "x"}));
    }

    #[test]
    fn test_relaxed_syntax() {
        let source = r#"
// descriptor list
[
  {
    name: 'label',
    value: "Go",
    type: 'string', /* inline */
    default: '',
  },
]
"#;
        let value = parse(source).unwrap();
        assert_eq!(
            value,
            json!([{"name": "label", "value": "Go", "type": "string", "default": ""}])
        );
    }

    #[test]
    fn test_key_order_preserved() {
        let value = parse("{z: 1, a: 2, m: 3}").unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse("0x1F").unwrap(), json!(31));
        assert_eq!(parse("-0x10").unwrap(), json!(-16));
        assert_eq!(parse(".5").unwrap(), json!(0.5));
        assert_eq!(parse("5.").unwrap(), json!(5.0));
        assert_eq!(parse("+3").unwrap(), json!(3));
        assert_eq!(parse("1e3").unwrap(), json!(1000.0));
        assert_eq!(parse("18446744073709551615").unwrap(), json!(u64::MAX));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(matches!(
            parse("01"),
            Err(Json5Error::InvalidNumber { .. })
        ));
        assert!(matches!(parse("."), Err(Json5Error::InvalidNumber { .. })));
        assert!(matches!(parse("1e"), Err(Json5Error::InvalidNumber { .. })));
        assert!(matches!(
            parse("Infinity"),
            Err(Json5Error::UnrepresentableNumber { .. })
        ));
        assert!(matches!(
            parse("-NaN"),
            Err(Json5Error::UnrepresentableNumber { .. })
        ));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(parse(r#"'it\'s'"#).unwrap(), json!("it's"));
        assert_eq!(parse(r#""a\tb\nc""#).unwrap(), json!("a\tb\nc"));
        assert_eq!(parse(r#"'\x41B'"#).unwrap(), json!("AB"));
        assert_eq!(parse(r#"'\uD83D\uDE00'"#).unwrap(), json!("\u{1F600}"));
        assert_eq!(parse(r#"'\uD83Dx'"#).unwrap(), json!("\u{FFFD}x"));
        assert_eq!(parse(r#"'\q'"#).unwrap(), json!("q"));
        assert_eq!(parse("'line \\\ncontinued'").unwrap(), json!("line continued"));
        assert_eq!(parse(r#"'日本'"#).unwrap(), json!("日本"));
    }

    #[test]
    fn test_invalid_escapes() {
        assert!(matches!(
            parse(r#"'\01'"#),
            Err(Json5Error::InvalidEscape { .. })
        ));
        assert!(matches!(
            parse(r#"'\xZZ'"#),
            Err(Json5Error::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(
            parse("'abc"),
            Err(Json5Error::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            parse("'ab\ncd'"),
            Err(Json5Error::UnexpectedChar { found: '\n', .. })
        ));
    }

    #[test]
    fn test_error_location() {
        let err = parse("{\n  a: 1,\n  b: ?\n}").unwrap_err();
        assert_eq!(
            err,
            Json5Error::UnexpectedChar {
                found: '?',
                line: 3,
                column: 6
            }
        );
    }

    #[test]
    fn test_trailing_content() {
        assert!(matches!(
            parse("{} x"),
            Err(Json5Error::UnexpectedChar { found: 'x', .. })
        ));
        assert!(matches!(
            parse("/* open"),
            Err(Json5Error::UnterminatedComment { .. })
        ));
    }

    #[test]
    fn test_nesting_depth() {
        let deepest = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert!(parse(&deepest).is_ok());

        let too_deep = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
        assert_eq!(
            parse(&too_deep),
            Err(Json5Error::RecursionLimit {
                line: 1,
                column: MAX_DEPTH as u32 + 1
            })
        );
    }

    #[test]
    fn test_bare_words_rejected() {
        assert!(matches!(
            parse("{a: undefined}"),
            Err(Json5Error::UnexpectedChar { found: 'u', .. })
        ));
        assert!(matches!(parse(""), Err(Json5Error::UnexpectedEnd { .. })));
    }
}
