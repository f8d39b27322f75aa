//! The document parser/serializer (C4): sequencing array blocks (or a
//! single top-level scalar) into one document, and the reverse.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::flatten;
use crate::framer::{self, Header};
use crate::scalar;
use crate::{ToonMap, Value};

/// Parses a complete TOON document using the default configuration.
pub fn parse(input: &str) -> Result<Value> {
    parse_with_config(input, &Config::default())
}

/// Parses a complete TOON document.
///
/// Empty or whitespace-only input parses to [`Value::Null`]. A single
/// content line that is not a valid array header parses as a bare scalar.
/// Otherwise the input is a sequence of `name[N]{fields}:` blocks, assembled
/// into a top-level [`Value::Object`] of array name to record array.
pub fn parse_with_config(input: &str, config: &Config) -> Result<Value> {
    if input.trim().is_empty() {
        return Ok(Value::Null);
    }

    let lines: Vec<&str> = input.lines().collect();
    let non_blank = lines.iter().filter(|l| !l.trim().is_empty()).count();

    let mut top = ToonMap::new();
    let mut idx = 0;
    while idx < lines.len() {
        if lines[idx].trim().is_empty() {
            idx += 1;
            continue;
        }

        if lines[idx].starts_with(' ') {
            if top.is_empty() && non_blank == 1 {
                return scalar::parse(lines[idx].trim(), idx + 1, 1);
            }
            return Err(Error::invalid_header(
                idx + 1,
                1,
                "indented line with no open array",
            ));
        }

        let header = match framer::parse_header(lines[idx], idx + 1) {
            Ok(h) => h,
            Err(e) => {
                if top.is_empty() && non_blank == 1 {
                    return scalar::parse(lines[idx].trim(), idx + 1, 1);
                }
                return Err(e);
            }
        };

        if top.contains_key(&header.name) {
            return Err(Error::duplicate_array_name(header.name));
        }

        idx += 1;
        let mut row_lines = Vec::new();
        while idx < lines.len() && lines[idx].starts_with(' ') {
            row_lines.push(idx);
            idx += 1;
        }

        if let Some(expected) = header.arity {
            if row_lines.len() != expected {
                return Err(Error::row_count_mismatch(
                    header.name.clone(),
                    expected,
                    row_lines.len(),
                    idx,
                ));
            }
        }

        let records = parse_rows(&header, &row_lines, &lines, config)?;
        top.insert(header.name.clone(), Value::Array(records));
    }

    Ok(Value::Object(top))
}

fn parse_rows(
    header: &Header,
    row_lines: &[usize],
    lines: &[&str],
    config: &Config,
) -> Result<Vec<Value>> {
    let mut records = Vec::with_capacity(row_lines.len());
    for &line_idx in row_lines {
        let body = framer::strip_indent(lines[line_idx], config.indent_size, line_idx + 1)?;
        let values = framer::parse_row_values(body, header.fields.len(), line_idx + 1)?;
        let flat_record = framer::row_to_record(&header.fields, values);
        let record = if config.advanced {
            Value::Object(flatten::unflatten(&flat_record, &config.separator)?)
        } else {
            Value::Object(flat_record)
        };
        records.push(record);
    }
    Ok(records)
}

/// Serializes a document using the default configuration.
pub fn serialize(doc: &Value) -> Result<String> {
    serialize_with_config(doc, &Config::default())
}

/// Serializes a document. A top-level [`Value::Object`] is rendered as a
/// sequence of array blocks — every entry must be a [`Value::Array`] of
/// record objects, per the normative grammar. Any other top-level value is
/// emitted as a single bare scalar.
pub fn serialize_with_config(doc: &Value, config: &Config) -> Result<String> {
    match doc {
        Value::Object(map) => {
            let mut out = String::new();
            for (name, value) in map.iter() {
                let records = value.as_array().ok_or_else(|| {
                    Error::non_uniform_array(
                        name.clone(),
                        "top-level document entries must be arrays of records",
                    )
                })?;
                out.push_str(&serialize_array(name, records, config)?);
            }
            Ok(out)
        }
        other => scalar::emit(other),
    }
}

fn serialize_array(name: &str, records: &[Value], config: &Config) -> Result<String> {
    if records.is_empty() {
        return Ok(format!("{}\n", framer::format_header(name, &[], Some(0))));
    }

    let flat_records = records
        .iter()
        .map(|record| {
            let obj = record.as_object().ok_or_else(|| {
                Error::non_uniform_array(name, "array elements must be objects")
            })?;
            if config.advanced {
                Ok(flatten::flatten(obj, &config.separator, config.max_flatten_depth))
            } else {
                Ok(obj.clone())
            }
        })
        .collect::<Result<Vec<ToonMap>>>()?;

    let fields: Vec<String> = flat_records[0].keys().cloned().collect();
    for record in &flat_records {
        let keys: Vec<&String> = record.keys().collect();
        if keys.len() != fields.len() || keys.iter().zip(fields.iter()).any(|(a, b)| *a != b) {
            return Err(Error::non_uniform_array(
                name,
                "records do not share a uniform, identically-ordered field set",
            ));
        }
    }

    let mut out = String::new();
    out.push_str(&framer::format_header(name, &fields, Some(flat_records.len())));
    out.push('\n');
    for record in &flat_records {
        let values: Vec<Value> = fields
            .iter()
            .map(|f| record.get(f).cloned().unwrap_or(Value::Null))
            .collect();
        out.push_str(&" ".repeat(config.indent_size));
        out.push_str(&framer::format_row(&values)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    #[test]
    fn test_empty_input_is_null() {
        assert_eq!(parse("").unwrap(), Value::Null);
        assert_eq!(parse("   \n  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_bare_scalar() {
        assert_eq!(parse("42").unwrap(), Value::Int(42));
        assert_eq!(parse("hello").unwrap(), Value::String("hello".into()));
    }

    #[test]
    fn test_scenario_simple_tabular() {
        let doc = toon!({
            "users": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]
        });
        let out = serialize(&doc).unwrap();
        assert_eq!(out, "users[2]{id,name}:\n  1,Alice\n  2,Bob\n");

        let parsed = parse(&out).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_scenario_quoting() {
        let doc = toon!({"s": [{"v": "a, b"}]});
        let out = serialize(&doc).unwrap();
        assert!(out.contains("\"a, b\""));
    }

    #[test]
    fn test_scenario_type_inference() {
        let input = "data[1]{n,f,b,x,s}:\n  42,3.14,true,null,hello\n";
        let parsed = parse(input).unwrap();
        let expected = toon!({
            "data": [{"n": 42, "f": 3.14, "b": true, "x": null, "s": "hello"}]
        });
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_scenario_arity_mismatch() {
        let input = "users[2]{id,name}:\n  1,Alice\n";
        assert!(matches!(
            parse(input),
            Err(Error::RowCountMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_array() {
        let doc = toon!({"empty": []});
        let out = serialize(&doc).unwrap();
        assert_eq!(out, "empty[0]{}:\n");
        assert_eq!(parse(&out).unwrap(), doc);
    }

    #[test]
    fn test_duplicate_array_name() {
        let input = "users[1]{id}:\n  1\nusers[1]{id}:\n  2\n";
        assert!(matches!(parse(input), Err(Error::DuplicateArrayName(_))));
    }

    #[test]
    fn test_multiple_arrays_preserve_order() {
        let doc = toon!({
            "users": [{"id": 1}],
            "products": [{"sku": "A001"}]
        });
        let out = serialize(&doc).unwrap();
        let users_pos = out.find("users").unwrap();
        let products_pos = out.find("products").unwrap();
        assert!(users_pos < products_pos);
    }

    #[test]
    fn test_advanced_nested_flatten_roundtrip() {
        let config = Config::advanced();
        let doc = toon!({
            "users": [
                {"id": 1, "address": {"city": "NYC", "zip": "10001"}}
            ]
        });
        let out = serialize_with_config(&doc, &config).unwrap();
        assert!(out.contains("users[1]{id,address.city,address.zip}:"));
        let parsed = parse_with_config(&out, &config).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_non_array_top_level_entry_rejected() {
        let mut map = ToonMap::new();
        map.insert("count".into(), Value::Int(1));
        assert!(matches!(
            serialize(&Value::Object(map)),
            Err(Error::NonUniformArray { .. })
        ));
    }

    #[test]
    fn test_string_ambiguous_with_literals_roundtrips_as_string() {
        let doc = toon!({"vals": [{"s": "true"}]});
        let out = serialize(&doc).unwrap();
        let parsed = parse(&out).unwrap();
        assert_eq!(parsed, doc);
    }
}
