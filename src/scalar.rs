//! The scalar codec (C1): emitting and parsing a single row-position token.
//!
//! A token is either a quoted string or a bareword. Barewords are classified
//! in a fixed priority order — `null`, boolean, integer, float, then string —
//! so that `emit`/`parse` round-trip every [`Value`](crate::Value) scalar
//! exactly.

use crate::error::{Error, Result};
use crate::Value;

const STRUCTURAL: [char; 6] = [',', ':', '[', ']', '{', '}'];

/// Whether a bareword string would be lexically ambiguous with a non-string
/// literal (or otherwise needs escaping) and must therefore be quoted.
pub fn bareword_needs_quotes(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.chars().any(|c| STRUCTURAL.contains(&c) || c.is_control()) {
        return true;
    }
    if s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }
    if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") {
        return true;
    }
    if s == "null" {
        return true;
    }
    if parse_integer(s).is_some() || parse_float(s).is_some() {
        return true;
    }
    false
}

/// Emits a scalar `Value` as a single row token. Arrays and objects are not
/// valid row scalars and are rejected with `UnsupportedType`.
pub fn emit(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => emit_float(*f),
        Value::String(s) => Ok(emit_string(s)),
        Value::Array(_) | Value::Object(_) => Err(Error::unsupported_type(
            "arrays and objects cannot appear as a row scalar",
        )),
    }
}

fn emit_float(f: f64) -> Result<String> {
    if f.is_nan() || f.is_infinite() {
        return Err(Error::unsupported_type(
            "non-finite floats have no literal in this grammar",
        ));
    }
    let mut s = format!("{}", f);
    if !s.contains('.') && !s.contains('e') && !s.contains('E') {
        s.push_str(".0");
    }
    Ok(s)
}

fn emit_string(s: &str) -> String {
    if bareword_needs_quotes(s) {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('"');
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                _ => out.push(c),
            }
        }
        out.push('"');
        out
    } else {
        s.to_string()
    }
}

/// Parses a single row token (already split on the row's commas) into a
/// `Value`. `line`/`col` are used only to build error locations.
pub fn parse(token: &str, line: usize, col: usize) -> Result<Value> {
    if let Some(rest) = token.strip_prefix('"') {
        return parse_quoted(rest, line, col);
    }
    let word = token.trim();
    if word == "null" {
        return Ok(Value::Null);
    }
    if word.eq_ignore_ascii_case("true") {
        return Ok(Value::Bool(true));
    }
    if word.eq_ignore_ascii_case("false") {
        return Ok(Value::Bool(false));
    }
    if let Some(i) = parse_integer(word) {
        return Ok(Value::Int(i));
    }
    if let Some(f) = parse_float(word) {
        return Ok(Value::Float(f));
    }
    Ok(Value::String(word.to_string()))
}

fn parse_quoted(rest: &str, line: usize, col: usize) -> Result<Value> {
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars();
    let mut closed = false;
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                closed = true;
                break;
            }
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => return Err(Error::unterminated_string(line, col)),
            },
            other => out.push(other),
        }
    }
    if !closed {
        return Err(Error::unterminated_string(line, col));
    }
    Ok(Value::String(out))
}

fn parse_integer(word: &str) -> Option<i64> {
    if word.is_empty() {
        return None;
    }
    let digits = word.strip_prefix('-').unwrap_or(word);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    word.parse::<i64>().ok()
}

fn parse_float(word: &str) -> Option<f64> {
    if word.is_empty() {
        return None;
    }
    let has_dot = word.contains('.');
    let has_exp = word.contains(['e', 'E']);
    if !has_dot && !has_exp {
        return None;
    }
    let body = word.strip_prefix('-').unwrap_or(word);
    if body.is_empty() {
        return None;
    }
    let mut saw_digit = false;
    let mut saw_dot = false;
    let mut saw_exp = false;
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '0'..='9' => saw_digit = true,
            '.' if !saw_dot && !saw_exp => saw_dot = true,
            'e' | 'E' if saw_digit && !saw_exp => {
                saw_exp = true;
                if matches!(chars.peek(), Some('+') | Some('-')) {
                    chars.next();
                }
            }
            _ => return None,
        }
    }
    if !saw_digit {
        return None;
    }
    word.parse::<f64>().ok()
}
