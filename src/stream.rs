//! The streaming writer/reader (C6): emitting one array at a time without
//! materializing the whole document, and the matching incremental reader.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::flatten;
use crate::framer::{self, Header};
use crate::scalar;
use crate::{ToonMap, Value};
use std::io::Write;

#[derive(Debug, PartialEq)]
enum State {
    Idle,
    InArray { name: String, fields: Vec<String>, rows_written: usize },
}

/// Incrementally writes TOON array blocks to an underlying [`std::io::Write`]
/// sink.
///
/// `begin_array` opens a block with an unknown-ahead-of-time arity
/// (emitting the `?` placeholder); `end_array` closes it. If the writer is
/// dropped while a block is open, the destructor finishes the block so the
/// output remains syntactically complete.
pub struct StreamWriter<W: Write> {
    sink: Option<W>,
    state: State,
    config: Config,
}

impl<W: Write> StreamWriter<W> {
    pub fn new(sink: W) -> Self {
        StreamWriter {
            sink: Some(sink),
            state: State::Idle,
            config: Config::default(),
        }
    }

    pub fn with_config(sink: W, config: Config) -> Self {
        StreamWriter {
            sink: Some(sink),
            state: State::Idle,
            config,
        }
    }

    fn sink_mut(&mut self) -> &mut W {
        self.sink.as_mut().expect("sink taken only on drop")
    }

    /// Opens a new array block, emitting its header with the `?` arity
    /// placeholder. Errors if a block is already open.
    pub fn begin_array(&mut self, name: &str, fields: &[String]) -> Result<()> {
        if !matches!(self.state, State::Idle) {
            return Err(Error::nested_array(name.to_string()));
        }
        let header = framer::format_header(name, fields, None);
        writeln!(self.sink_mut(), "{header}")?;
        self.state = State::InArray {
            name: name.to_string(),
            fields: fields.to_vec(),
            rows_written: 0,
        };
        Ok(())
    }

    /// Writes one row of raw values, in the order of the field list passed
    /// to `begin_array`.
    pub fn write_row(&mut self, values: &[Value]) -> Result<()> {
        let (fields, indent_size) = match &self.state {
            State::InArray { fields, .. } => (fields.clone(), self.config.indent_size),
            State::Idle => return Err(Error::no_array_open()),
        };
        if values.len() != fields.len() {
            return Err(Error::arity_error(fields.len(), values.len()));
        }
        let row = framer::format_row(values)?;
        writeln!(self.sink_mut(), "{}{row}", " ".repeat(indent_size))?;
        if let State::InArray { rows_written, .. } = &mut self.state {
            *rows_written += 1;
        }
        Ok(())
    }

    /// Writes one record, projecting it through the flatten transform (when
    /// `config.advanced` is set) before ordering it by the declared fields.
    pub fn write_item(&mut self, record: &ToonMap) -> Result<()> {
        let fields = match &self.state {
            State::InArray { fields, .. } => fields.clone(),
            State::Idle => return Err(Error::no_array_open()),
        };
        let flat = if self.config.advanced {
            flatten::flatten(record, &self.config.separator, self.config.max_flatten_depth)
        } else {
            record.clone()
        };
        let values: Vec<Value> = fields
            .iter()
            .map(|f| flat.get(f).cloned().unwrap_or(Value::Null))
            .collect();
        self.write_row(&values)
    }

    /// Writes every record yielded by `items`, returning the count written.
    pub fn write_items<I>(&mut self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = ToonMap>,
    {
        let mut count = 0;
        for item in items {
            self.write_item(&item)?;
            count += 1;
        }
        Ok(count)
    }

    /// Closes the current array block, returning the number of rows written.
    pub fn end_array(&mut self) -> Result<usize> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::InArray { rows_written, .. } => Ok(rows_written),
            State::Idle => {
                self.state = State::Idle;
                Err(Error::no_array_open())
            }
        }
    }

    /// Convenience combining `begin_array`/`write_items`/`end_array`, eagerly
    /// materializing the row count so the header carries a numeric arity
    /// instead of the `?` placeholder.
    pub fn write_array<I>(&mut self, name: &str, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = ToonMap>,
    {
        let materialized: Vec<ToonMap> = items.into_iter().collect();
        let fields: Vec<String> = materialized
            .first()
            .map(|r| {
                if self.config.advanced {
                    flatten::flatten(r, &self.config.separator, self.config.max_flatten_depth)
                        .keys()
                        .cloned()
                        .collect()
                } else {
                    r.keys().cloned().collect()
                }
            })
            .unwrap_or_default();

        if !matches!(self.state, State::Idle) {
            return Err(Error::nested_array(name.to_string()));
        }
        let header = framer::format_header(name, &fields, Some(materialized.len()));
        writeln!(self.sink_mut(), "{header}")?;
        self.state = State::InArray {
            name: name.to_string(),
            fields,
            rows_written: 0,
        };
        let count = self.write_items(materialized)?;
        self.end_array()?;
        Ok(count)
    }

    /// Flushes and releases the underlying sink, finishing any open array.
    pub fn finish(mut self) -> Result<W> {
        self.close_open_array();
        Ok(self.sink.take().expect("sink present until finish/drop"))
    }

    fn close_open_array(&mut self) {
        if matches!(self.state, State::InArray { .. }) {
            let _ = self.end_array();
        }
    }
}

impl<W: Write> Drop for StreamWriter<W> {
    fn drop(&mut self) {
        self.close_open_array();
        if let Some(mut sink) = self.sink.take() {
            let _ = sink.flush();
        }
    }
}

/// Incrementally scans a document one array block at a time. Each call to
/// [`StreamReader::next_block`] reads only as far as the end of the next
/// block (its header plus the indented rows that follow it) before
/// returning, so peak memory is proportional to the largest single array
/// block rather than to the whole document. Earlier blocks' records are
/// handed to the caller and are not retained.
pub struct StreamReader<'a> {
    input: &'a str,
    pos: usize,
    line_no: usize,
    config: Config,
    seen_names: std::collections::HashSet<String>,
    blocks_emitted: usize,
    done: bool,
}

impl<'a> StreamReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, Config::default())
    }

    pub fn with_config(input: &'a str, config: Config) -> Self {
        StreamReader {
            input,
            pos: 0,
            line_no: 0,
            config,
            seen_names: std::collections::HashSet::new(),
            blocks_emitted: 0,
            done: false,
        }
    }

    /// Byte offset into the original input the reader has consumed so far.
    pub fn bytes_consumed(&self) -> usize {
        self.pos
    }

    fn read_line(&mut self) -> &'a str {
        let rest = &self.input[self.pos..];
        let (line, advance) = match rest.find('\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;
        self.line_no += 1;
        line
    }

    fn read_block_rows(&mut self, header: Header) -> Result<(String, Vec<Value>)> {
        let mut records = Vec::new();
        loop {
            if self.pos >= self.input.len() {
                break;
            }
            let save_pos = self.pos;
            let save_line_no = self.line_no;
            let line = self.read_line();
            if !line.starts_with(' ') {
                self.pos = save_pos;
                self.line_no = save_line_no;
                break;
            }
            let line_no = self.line_no;
            let body = framer::strip_indent(line, self.config.indent_size, line_no)?;
            let values = framer::parse_row_values(body, header.fields.len(), line_no)?;
            let flat_record = framer::row_to_record(&header.fields, values);
            let record = if self.config.advanced {
                Value::Object(flatten::unflatten(&flat_record, &self.config.separator)?)
            } else {
                Value::Object(flat_record)
            };
            records.push(record);
        }

        if let Some(expected) = header.arity {
            if records.len() != expected {
                return Err(Error::row_count_mismatch(
                    header.name.clone(),
                    expected,
                    records.len(),
                    self.line_no,
                ));
            }
        }

        Ok((header.name, records))
    }

    /// Returns the next `(array_name, records)` pair, or `None` once the
    /// input is exhausted. A document that is a single bare scalar (no
    /// array blocks at all) yields one pair with an empty array name.
    pub fn next_block(&mut self) -> Option<Result<(String, Vec<Value>)>> {
        if self.done {
            return None;
        }
        loop {
            if self.pos >= self.input.len() {
                self.done = true;
                return None;
            }
            let line = self.read_line();
            let line_no = self.line_no;
            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with(' ') {
                self.done = true;
                return Some(Err(Error::invalid_header(
                    line_no,
                    1,
                    "indented line with no open array",
                )));
            }

            return Some(match framer::parse_header(line, line_no) {
                Ok(header) => {
                    if !self.seen_names.insert(header.name.clone()) {
                        self.done = true;
                        Err(Error::duplicate_array_name(header.name))
                    } else {
                        let result = self.read_block_rows(header);
                        if result.is_err() {
                            self.done = true;
                        }
                        self.blocks_emitted += 1;
                        result
                    }
                }
                Err(e) => {
                    if self.blocks_emitted == 0 && self.input[self.pos..].trim().is_empty() {
                        self.done = true;
                        scalar::parse(line.trim(), line_no, 1).map(|v| (String::new(), vec![v]))
                    } else {
                        self.done = true;
                        Err(e)
                    }
                }
            });
        }
    }
}

impl<'a> Iterator for StreamReader<'a> {
    type Item = Result<(String, Vec<Value>)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block()
    }
}

/// Parses a document incrementally, yielding `(array_name, records)` pairs
/// as each block is encountered. Arity `?` is accepted; rows are counted
/// until the next non-indented line or end of input. Built on
/// [`StreamReader`], so no block after the first is read until the
/// previous one has already been returned.
pub fn stream_parse(input: &str) -> Result<Vec<(String, Vec<Value>)>> {
    stream_parse_with_config(input, &Config::default())
}

pub fn stream_parse_with_config(input: &str, config: &Config) -> Result<Vec<(String, Vec<Value>)>> {
    let mut reader = StreamReader::with_config(input, config.clone());
    let mut out = Vec::new();
    while let Some(block) = reader.next_block() {
        out.push(block?);
    }
    Ok(out)
}
