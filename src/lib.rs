//! # toon-rs
//!
//! A Serde-compatible codec for TOON (Token-Oriented Object Notation): a
//! compact, line-oriented encoding for arrays of uniform records.
//!
//! ## What is TOON?
//!
//! A TOON document is a sequence of array blocks. Each block opens with a
//! header naming the array, its row count, and its field list, followed by
//! one indented, comma-separated row per record:
//!
//! ```text
//! users[2]{id,name,active}:
//!   1,Alice,true
//!   2,Bob,false
//! ```
//!
//! A document containing no blocks, just a single scalar line, parses to
//! that scalar directly.
//!
//! ## Key Features
//!
//! - **Token-efficient**: one header amortizes the field names across every
//!   row, instead of repeating them per record the way JSON does.
//! - **Serde-compatible**: works with `#[derive(Serialize, Deserialize)]`
//!   the same way `serde_json` does.
//! - **Schema-aware**: [`schema`] lets callers declare or infer field types
//!   and validate a parsed document against them.
//! - **Streaming**: [`stream`] lets a writer emit one array block at a time
//!   without materializing the whole document in memory.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! toon-rs = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_rs::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Document {
//!     users: Vec<User>,
//! }
//!
//! let doc = Document {
//!     users: vec![
//!         User { id: 1, name: "Alice".to_string(), active: true },
//!         User { id: 2, name: "Bob".to_string(), active: false },
//!     ],
//! };
//!
//! let toon_string = to_string(&doc).unwrap();
//! let doc_back: Document = from_str(&toon_string).unwrap();
//! assert_eq!(doc, doc_back);
//! ```
//!
//! ### Dynamic values with the `toon!` macro
//!
//! ```rust
//! use toon_rs::{toon, Value};
//!
//! let data = toon!({
//!     "users": [{"id": 1, "name": "Alice"}]
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert!(obj.contains_key("users"));
//! }
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks.
//! - All array indexing is bounds-checked.
//! - Proper error propagation with `Result` types; no panics in public API.

pub mod config;
pub mod de;
pub mod document;
pub mod error;
pub mod flatten;
pub mod framer;
pub mod macros;
pub mod map;
pub mod scalar;
pub mod schema;
pub mod ser;
pub mod spec;
pub mod stream;
pub mod value;

pub use config::Config;
pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::ToonMap;
pub use schema::{infer_schema, Field, FieldType, MultiSchema, Schema, ToonFieldMap};
pub use ser::ToonValueSerializer;
pub use stream::{stream_parse, stream_parse_with_config, StreamReader, StreamWriter};
pub use value::Value;

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a TOON string using the default
/// [`Config`].
///
/// # Errors
///
/// Returns an error if the value cannot be serialized, or if it serializes
/// to a top-level shape this format cannot represent (e.g. a map whose
/// values aren't all arrays of uniform records).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_config(value, &Config::default())
}

/// Serialize any `T: Serialize` to a TOON string with a custom [`Config`].
///
/// # Errors
///
/// Returns an error if the value cannot be serialized, or if it serializes
/// to a top-level shape this format cannot represent.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_config<T>(value: &T, config: &Config) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    document::serialize_with_config(&value, config)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for working with TOON data dynamically when the structure isn't
/// known at compile time.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ToonValueSerializer)
}

/// Convert a [`Value`] back into any `T: Deserialize`.
///
/// # Errors
///
/// Returns an error if the value's shape doesn't match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(Deserializer::from_value(value))
}

/// Serialize any `T: Serialize` to a writer in TOON format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let toon_string = to_string(value)?;
    writer.write_all(toon_string.as_bytes())?;
    Ok(())
}

/// Serialize any `T: Serialize` to a writer in TOON format with a custom
/// [`Config`].
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_config<W, T>(mut writer: W, value: &T, config: &Config) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let toon_string = to_string_with_config(value, config)?;
    writer.write_all(toon_string.as_bytes())?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of TOON text, using
/// the default [`Config`].
///
/// # Errors
///
/// Returns an error if the input is not valid TOON, or cannot be
/// deserialized to type `T`. Error messages include line and column
/// information where available.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let value = document::parse(s)?;
    from_value(value)
}

/// Deserialize an instance of type `T` from a string of TOON text with a
/// custom [`Config`].
///
/// # Errors
///
/// Returns an error if the input is not valid TOON, or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_config<T>(s: &str, config: &Config) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let value = document::parse_with_config(s, config)?;
    from_value(value)
}

/// Deserialize an instance of type `T` from an I/O stream of TOON.
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not
/// valid TOON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of TOON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOON, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
