//! Tests against the literal scenarios and boundary cases of the grammar.

use serde::{Deserialize, Serialize};
use toon_rs::{
    document, from_str, infer_schema, to_string, to_string_with_config, toon, Config, Error,
    Field, FieldType, Schema, Value,
};

#[test]
fn test_scenario_simple_tabular() {
    let doc = toon!({
        "users": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]
    });
    let out = document::serialize(&doc).unwrap();
    assert_eq!(out, "users[2]{id,name}:\n  1,Alice\n  2,Bob\n");
}

#[test]
fn test_scenario_quoting() {
    let doc = toon!({"s": [{"v": "a, b"}]});
    let out = document::serialize(&doc).unwrap();
    assert!(out.contains("\"a, b\""));
}

#[test]
fn test_scenario_nested_flatten() {
    let doc = toon!({
        "u": [{"id": 1, "a": {"c": "NYC", "z": "10001"}}]
    });
    let config = Config::advanced();
    let out = to_string_with_config(&doc, &config).unwrap();
    assert_eq!(out, "u[1]{id,a.c,a.z}:\n  1,NYC,\"10001\"\n");
}

#[test]
fn test_scenario_type_inference() {
    let input = "data[1]{n,f,b,x,s}:\n  42,3.14,true,null,hello\n";
    let parsed = document::parse(input).unwrap();
    let expected = toon!({
        "data": [{"n": 42, "f": 3.14, "b": true, "x": null, "s": "hello"}]
    });
    assert_eq!(parsed, expected);
}

#[test]
fn test_scenario_arity_mismatch() {
    let input = "users[2]{id,name}:\n  1,Alice\n";
    assert!(matches!(
        document::parse(input),
        Err(Error::RowCountMismatch { .. })
    ));
}

#[test]
fn test_scenario_schema_reject() {
    let input = "users[1]{id,name}:\n  invalid,Alice\n";
    let doc = document::parse(input).unwrap();
    let schema = Schema::new(
        "users",
        vec![
            Field::new("id", FieldType::Integer),
            Field::new("name", FieldType::String),
        ],
    );
    let doc_map = doc.as_object().unwrap();
    assert!(schema.validate(doc_map).is_err());
}

#[test]
fn test_boundary_empty_input_is_null() {
    assert_eq!(document::parse("").unwrap(), Value::Null);
    assert_eq!(document::parse("   \n \n").unwrap(), Value::Null);
}

#[test]
fn test_boundary_empty_array_header() {
    let doc = toon!({"empty": []});
    let out = document::serialize(&doc).unwrap();
    assert_eq!(out, "empty[0]{}:\n");
    assert_eq!(document::parse(&out).unwrap(), doc);
}

#[test]
fn test_boundary_unknown_arity_header_counts_rows() {
    let input = "users[?]{id,name}:\n  1,Alice\n  2,Bob\n  3,Carol\n";
    let doc = document::parse(input).unwrap();
    let users = doc.as_object().unwrap().get("users").unwrap().as_array().unwrap();
    assert_eq!(users.len(), 3);
}

#[test]
fn test_boundary_literal_strings_roundtrip_as_strings() {
    for literal in ["true", "false", "null", "42", "3.14"] {
        let doc = toon!({"vals": [{"s": literal}]});
        let out = document::serialize(&doc).unwrap();
        assert!(out.contains(&format!("\"{literal}\"")));
        assert_eq!(document::parse(&out).unwrap(), doc);
    }
}

#[test]
fn test_no_alternate_delimiters_or_length_markers() {
    // The grammar has exactly one row delimiter (comma) and one arity
    // notation (a bare number, or `?`) — no tab/pipe delimiters, no `#N`
    // length-marker prefix exist to parse.
    assert!(document::parse("users[#2]{id}:\n  1\n  2\n").is_err());
}

#[test]
fn test_infer_schema_never_fails_its_own_document() {
    let doc = toon!({
        "users": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]
    });
    let doc_map = doc.as_object().unwrap();
    let schema = infer_schema(doc_map, "users").unwrap();
    assert!(schema.validate(doc_map).is_ok());
}

#[test]
fn test_streaming_equivalence_with_document_parse() {
    let toon_text = "users[2]{id,name}:\n  1,Alice\n  2,Bob\n";
    let doc = document::parse(toon_text).unwrap();
    let streamed = toon_rs::stream_parse(toon_text).unwrap();
    let mut rebuilt = toon_rs::ToonMap::new();
    for (name, records) in streamed {
        rebuilt.insert(name, Value::Array(records));
    }
    assert_eq!(Value::Object(rebuilt), doc);
}

#[test]
fn test_streaming_reader_yields_blocks_before_reading_past_them() {
    // A malformed second block must not stop the first block from being
    // yielded: proof that StreamReader reads on demand, one block at a
    // time, rather than building the whole document before returning
    // anything (which is what document::parse does, and which fails here).
    let toon_text = "users[2]{id,name}:\n  1,Alice\n  2,Bob\nbroken[9]{sku}:\n  A001\n";
    assert!(document::parse(toon_text).is_err());

    let mut reader = toon_rs::StreamReader::new(toon_text);
    let (name, records) = reader.next_block().unwrap().unwrap();
    assert_eq!(name, "users");
    assert_eq!(records.len(), 2);
    assert!(reader.bytes_consumed() < toon_text.len());

    assert!(reader.next_block().unwrap().is_err());
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Tagged {
    name: String,
    tag: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct TaggedList {
    items: Vec<Tagged>,
}

#[test]
fn test_single_array_field_struct_roundtrip() {
    let list = TaggedList {
        items: vec![
            Tagged {
                name: "widget".to_string(),
                tag: "rust".to_string(),
            },
            Tagged {
                name: "gadget".to_string(),
                tag: "serde".to_string(),
            },
        ],
    };
    let toon_text = to_string(&list).unwrap();
    assert!(toon_text.starts_with("items[2]{name,tag}:"));
    let back: TaggedList = from_str(&toon_text).unwrap();
    assert_eq!(list, back);
}
