//! The array framer (C3): the `name[N]{f1,f2,...}:` header grammar and its
//! indented row body.

use crate::error::{Error, Result};
use crate::scalar;
use crate::{ToonMap, Value};

/// A parsed array header: its name, declared arity (`None` for the `?`
/// placeholder), and ordered field list.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub name: String,
    pub arity: Option<usize>,
    pub fields: Vec<String>,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parses a `name[N]{f1,f2,...}:` header line. `line_no` is used only for
/// error reporting.
pub fn parse_header(line: &str, line_no: usize) -> Result<Header> {
    let bracket = line
        .find('[')
        .ok_or_else(|| Error::invalid_header(line_no, 1, "missing `[` in array header"))?;

    let name = &line[..bracket];
    if name.is_empty()
        || !name.starts_with(is_ident_start)
        || !name.chars().all(is_ident_continue)
    {
        return Err(Error::invalid_header(
            line_no,
            1,
            format!("invalid array name `{}`", name),
        ));
    }

    let close_bracket = line[bracket + 1..].find(']').map(|i| i + bracket + 1);
    let close_bracket = close_bracket.ok_or_else(|| {
        Error::invalid_header(line_no, bracket + 1, "missing `]` in array header")
    })?;

    let arity_str = &line[bracket + 1..close_bracket];
    let arity = if arity_str == "?" {
        None
    } else {
        Some(arity_str.parse::<usize>().map_err(|_| {
            Error::invalid_header(
                line_no,
                bracket + 2,
                format!("invalid arity `{}`, expected a non-negative integer or `?`", arity_str),
            )
        })?)
    };

    let rest = &line[close_bracket + 1..];
    let open_brace = rest.find('{').ok_or_else(|| {
        Error::invalid_header(line_no, close_bracket + 1, "missing `{` in array header")
    })?;
    if !rest[..open_brace].is_empty() {
        return Err(Error::invalid_header(
            line_no,
            close_bracket + 1,
            "unexpected characters between `]` and `{`",
        ));
    }

    let close_brace = rest[open_brace + 1..].find('}').map(|i| i + open_brace + 1);
    let close_brace = close_brace
        .ok_or_else(|| Error::invalid_header(line_no, close_bracket + open_brace + 1, "missing `}` in array header"))?;

    let fields_str = &rest[open_brace + 1..close_brace];
    let fields: Vec<String> = if fields_str.is_empty() {
        Vec::new()
    } else {
        fields_str.split(',').map(|s| s.to_string()).collect()
    };
    for f in &fields {
        if f.is_empty() {
            return Err(Error::invalid_header(line_no, 1, "empty field name in header"));
        }
    }

    let tail = rest[close_brace + 1..].trim_end();
    if tail != ":" {
        return Err(Error::invalid_header(
            line_no,
            1,
            "array header must end with `:`",
        ));
    }

    Ok(Header { name: name.to_string(), arity, fields })
}

/// Emits a header line (without trailing newline) for the given name, field
/// list, and arity. `None` emits the `?` placeholder.
pub fn format_header(name: &str, fields: &[String], arity: Option<usize>) -> String {
    let arity_str = match arity {
        Some(n) => n.to_string(),
        None => "?".to_string(),
    };
    format!("{name}[{arity_str}]{{{}}}:", fields.join(","))
}

/// Splits a row body into its comma-separated tokens, respecting quoted
/// strings (commas inside quotes do not split).
pub fn split_row_tokens(body: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '\\' => {
                    cur.push(c);
                    if let Some(next) = chars.next() {
                        cur.push(next);
                    }
                }
                '"' => {
                    cur.push(c);
                    in_quotes = false;
                }
                _ => cur.push(c),
            }
        } else {
            match c {
                '"' => {
                    cur.push(c);
                    in_quotes = true;
                }
                ',' => out.push(std::mem::take(&mut cur)),
                _ => cur.push(c),
            }
        }
    }
    out.push(cur);
    out
}

/// Strips exactly `indent_size` leading spaces from a row line, erroring if
/// the indentation doesn't match exactly.
pub fn strip_indent(line: &str, indent_size: usize, line_no: usize) -> Result<&str> {
    let leading = line.chars().take_while(|c| *c == ' ').count();
    if leading != indent_size {
        return Err(Error::indent_error(line_no, leading + 1, indent_size, leading));
    }
    Ok(&line[indent_size..])
}

/// Parses one row's body (post-indent-strip) into scalar `Value`s, checking
/// the token count against the declared field count.
pub fn parse_row_values(body: &str, field_count: usize, line_no: usize) -> Result<Vec<Value>> {
    let tokens = split_row_tokens(body);
    if tokens.len() != field_count {
        return Err(Error::field_count_mismatch(line_no, field_count, tokens.len()));
    }
    tokens
        .iter()
        .map(|t| scalar::parse(t.trim(), line_no, 1))
        .collect()
}

/// Builds a flat record (field name -> value) from a row's declared field
/// list and parsed values.
pub fn row_to_record(fields: &[String], values: Vec<Value>) -> ToonMap {
    let mut record = ToonMap::new();
    for (field, value) in fields.iter().zip(values) {
        record.insert(field.clone(), value);
    }
    record
}

/// Emits one row (without leading indentation or trailing newline) from
/// values already ordered to match the header's field list.
pub fn format_row(values: &[Value]) -> Result<String> {
    let tokens: Result<Vec<String>> = values.iter().map(scalar::emit).collect();
    Ok(tokens?.join(","))
}
