//! Flatten/unflatten (C2): the dotted-path projection between nested
//! records and flat rows.
//!
//! Arrays are opaque to this transform — a record containing an array field
//! is not descended into, since the row format has nowhere to put a nested
//! sequence.

use crate::error::{Error, Result};
use crate::{ToonMap, Value};

/// Flattens a nested object into a one-level map of separator-joined paths.
///
/// `max_depth` bounds how many levels are descended; once reached, the
/// subtree at that depth is kept as an opaque object leaf rather than
/// descended further.
pub fn flatten(object: &ToonMap, separator: &str, max_depth: Option<usize>) -> ToonMap {
    let mut out = ToonMap::new();
    for (key, value) in object.iter() {
        flatten_into(key.clone(), value, separator, max_depth, 1, &mut out);
    }
    out
}

fn flatten_into(
    prefix: String,
    value: &Value,
    separator: &str,
    max_depth: Option<usize>,
    depth: usize,
    out: &mut ToonMap,
) {
    match value {
        Value::Object(map) if !map.is_empty() && max_depth.map(|d| depth < d).unwrap_or(true) => {
            for (key, child) in map.iter() {
                let joined = format!("{prefix}{separator}{key}");
                flatten_into(joined, child, separator, max_depth, depth + 1, out);
            }
        }
        other => {
            out.insert(prefix, other.clone());
        }
    }
}

/// Inverse of [`flatten`]: rebuilds a nested object from a flat map of
/// separator-joined keys.
pub fn unflatten(flat: &ToonMap, separator: &str) -> Result<ToonMap> {
    let mut root = ToonMap::new();
    for (key, value) in flat.iter() {
        let parts: Vec<&str> = key.split(separator).collect();
        insert_path(&mut root, &parts, value.clone(), key)?;
    }
    Ok(root)
}

fn insert_path(map: &mut ToonMap, parts: &[&str], value: Value, full_key: &str) -> Result<()> {
    let (head, rest) = parts.split_first().expect("split always yields >=1 part");
    if rest.is_empty() {
        if map.contains_key(*head) {
            return Err(Error::flatten_conflict(full_key));
        }
        map.insert((*head).to_string(), value);
        return Ok(());
    }

    match map.get_mut(*head) {
        Some(Value::Object(child)) => insert_path(child, rest, value, full_key),
        Some(_) => Err(Error::flatten_conflict(full_key)),
        None => {
            let mut child = ToonMap::new();
            insert_path(&mut child, rest, value, full_key)?;
            map.insert((*head).to_string(), Value::Object(child));
            Ok(())
        }
    }
}
