//! TOON format specification
//!
//! This module documents the TOON (Token-Oriented Object Notation) grammar
//! as implemented by this crate.
//!
//! # Overview
//!
//! TOON is a line-oriented encoding for arrays of uniform records. Instead
//! of repeating field names per record the way JSON does, a TOON document
//! declares the field list once in a header and emits one row per record:
//!
//! ```text
//! users[2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```
//!
//! # Grammar
//!
//! ```text
//! document   := ws* (block ws*)*  | scalar ws*
//! block      := header "\n" row*
//! header     := ident "[" (digits | "?") "]" "{" fields "}" ":"
//! fields     := (fieldname ("," fieldname)*)?
//! fieldname  := one or more chars excluding "," "{" "}" and control
//! row        := indent scalars "\n"
//! indent     := exactly indent_size spaces (default 2)
//! scalars    := scalar ("," scalar)*
//! scalar     := quoted | bareword
//! quoted     := "\"" ( escape | non-quote-non-backslash )* "\""
//! escape     := "\\" ( "\"" | "\\" | "n" | "r" | "t" )
//! bareword   := chars excluding "," ":" "[" "]" "{" "}" "\"" and newline,
//!               trimmed
//! ident      := [A-Za-z_][A-Za-z0-9_]*
//! ```
//!
//! Line endings: `\n` on emission; both `\n` and `\r\n` accepted on parse.
//! UTF-8 throughout; decoded code points pass through quoted strings
//! unchanged.
//!
//! # A document is a sequence of array blocks, or one bare scalar
//!
//! A top-level [`crate::Value::Object`] serializes to one block per entry,
//! in insertion order; every entry's value must itself be a
//! [`crate::Value::Array`] of record objects — anything else at the top
//! level fails to serialize with [`crate::Error::NonUniformArray`]. A
//! document with no blocks and exactly one non-blank line that doesn't
//! parse as a header is instead a single bare scalar:
//!
//! ```text
//! 42
//! ```
//!
//! parses to `Value::Int(42)`.
//!
//! # Array headers
//!
//! `name[N]{field1,field2,...}:` names the array, its arity (`N`, or `?`
//! when the row count isn't known up front — used by the streaming
//! writer), and its ordered field list. Every row below the header, until
//! the next non-indented line or end of input, supplies one record's
//! values in that field order.
//!
//! ```text
//! users[2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```
//!
//! When `N` is a number, the parser requires exactly that many rows and
//! raises [`crate::Error::RowCountMismatch`] otherwise. An empty array
//! still requires its header: `empty[0]{}:` with no following rows.
//!
//! # Scalars
//!
//! Each row is a comma-separated list of scalar tokens, parsed and emitted
//! in this priority order:
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Null | `null` | `null` |
//! | Boolean | `true` or `false` | `true` |
//! | Integer | optional `-`, decimal digits | `42`, `-7` |
//! | Float | decimal point and/or exponent | `3.14`, `1e-6` |
//! | String | unquoted bareword, or `"quoted"` | `Alice`, `"a, b"` |
//!
//! A bareword is quoted on output exactly when leaving it bare would change
//! its parsed type or otherwise be ambiguous: it is empty, starts or ends
//! with whitespace, contains a structural character (`,` `:` `[` `]` `{`
//! `}`), case-insensitively equals `true`/`false`/`null`, or would itself
//! parse as an integer or float. This is why the string `"42"` round-trips
//! as the quoted token `"42"` rather than the bareword `42` — unquoted, it
//! would parse back as `Value::Int(42)`.
//!
//! Quoted strings support four escapes: `\"`, `\\`, `\n`, `\r`, `\t`.
//!
//! # Non-goals
//!
//! This grammar has no inline-array shorthand, no list-of-objects form, no
//! alternate delimiters (tab/pipe), no length-marker prefix, and no
//! `Date`/`BigInt`/non-finite-float literals — every array is either
//! tabular or empty, and every value is one of the seven [`crate::Value`]
//! shapes. Non-finite floats (`NaN`, `±Infinity`) have no literal in this
//! grammar and are rejected at serialization time with
//! [`crate::Error::UnsupportedType`] rather than silently downgraded to
//! `null`.
//!
//! # Nested data: the advanced mode
//!
//! Record fields are otherwise restricted to scalars. [`crate::Config::advanced`]
//! lifts this by flattening nested objects into dotted field names before
//! serialization (and unflattening them back into nested objects on parse);
//! see [`crate::flatten`]. Arrays are always an opaque leaf under flatten —
//! a field whose value is itself an array never gets flattened into
//! siblings.
//!
//! ```text
//! users[1]{id,address.city,address.zip}:
//!   1,NYC,"10001"
//! ```
//!
//! # Conformance
//!
//! This is the complete, closed grammar this crate parses and emits; there
//! is no extended or permissive mode beyond [`crate::Config`]'s documented
//! options.

// This module contains only documentation; no implementation code.
