//! Error types for TOON parsing, serialization, and validation.
//!
//! The error set is closed: every failure mode the codec can hit has its own
//! variant, and every variant raised by the parser carries a `line`/`column`
//! so a caller can point at the offending source text.

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during TOON encoding and decoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The `name[N]{fields}:` header line did not match the grammar.
    #[error("invalid array header at line {line}, column {col}: {msg}")]
    InvalidHeader { line: usize, col: usize, msg: String },

    /// A numeric arity did not match the number of body rows actually present.
    #[error("array `{name}` declared {expected} rows but found {found} at line {line}")]
    RowCountMismatch {
        name: String,
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A row had more or fewer comma-separated tokens than the declared field list.
    #[error("row at line {line} has {found} fields, expected {expected}")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A body row's leading whitespace did not match `indent_size`.
    #[error("indent error at line {line}, column {col}: expected {expected} spaces, found {found}")]
    IndentError {
        line: usize,
        col: usize,
        expected: usize,
        found: usize,
    },

    /// A quoted scalar was not closed before the row terminator.
    #[error("unterminated string at line {line}, column {col}")]
    UnterminatedString { line: usize, col: usize },

    /// Two top-level array blocks declared the same name.
    #[error("duplicate array name `{0}`")]
    DuplicateArrayName(String),

    /// `unflatten` found a key path that requires a node to be both a leaf and an object.
    #[error("flatten conflict on path `{0}`")]
    FlattenConflict(String),

    /// A top-level array's records did not share a uniform flattened field set.
    #[error("array `{name}` is not uniform: {msg}")]
    NonUniformArray { name: String, msg: String },

    /// The streaming writer was asked to `begin_array` while already inside one.
    #[error("cannot begin array `{0}`: a streaming array is already open")]
    NestedArray(String),

    /// A row written to the streaming writer had the wrong number of values.
    #[error("expected {expected} values, found {found}")]
    ArityError { expected: usize, found: usize },

    /// A row or `end_array` was requested with no array currently open.
    #[error("no array is currently open")]
    NoArrayOpen,

    /// A value failed schema validation.
    #[error("validation failed for field `{field}`: {msg}")]
    ValidationError { field: String, msg: String },

    /// A value could not be represented in this grammar (e.g. a non-finite float).
    #[error("unsupported value: {0}")]
    UnsupportedType(String),

    /// I/O failure from an underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(String),

    /// Error raised by a `serde::Serialize`/`Deserialize` impl outside the core taxonomy.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub fn invalid_header(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::InvalidHeader {
            line,
            col,
            msg: msg.into(),
        }
    }

    pub fn row_count_mismatch(name: impl Into<String>, expected: usize, found: usize, line: usize) -> Self {
        Error::RowCountMismatch {
            name: name.into(),
            expected,
            found,
            line,
        }
    }

    pub fn field_count_mismatch(line: usize, expected: usize, found: usize) -> Self {
        Error::FieldCountMismatch { line, expected, found }
    }

    pub fn indent_error(line: usize, col: usize, expected: usize, found: usize) -> Self {
        Error::IndentError {
            line,
            col,
            expected,
            found,
        }
    }

    pub fn unterminated_string(line: usize, col: usize) -> Self {
        Error::UnterminatedString { line, col }
    }

    pub fn duplicate_array_name(name: impl Into<String>) -> Self {
        Error::DuplicateArrayName(name.into())
    }

    pub fn flatten_conflict(path: impl Into<String>) -> Self {
        Error::FlattenConflict(path.into())
    }

    pub fn non_uniform_array(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::NonUniformArray {
            name: name.into(),
            msg: msg.into(),
        }
    }

    pub fn nested_array(name: impl Into<String>) -> Self {
        Error::NestedArray(name.into())
    }

    pub fn arity_error(expected: usize, found: usize) -> Self {
        Error::ArityError { expected, found }
    }

    pub fn no_array_open() -> Self {
        Error::NoArrayOpen
    }

    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::ValidationError {
            field: field.into(),
            msg: msg.into(),
        }
    }

    pub fn unsupported_type(msg: impl Into<String>) -> Self {
        Error::UnsupportedType(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
