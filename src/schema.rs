//! The schema engine (C5): field-level constraints, per-array schemas,
//! multi-array schemas, and inference of a schema from observed data.

use crate::error::{Error, Result};
use crate::{ToonMap, Value};
use regex::Regex;
use std::collections::HashSet;

/// The type gate a [`Field`] enforces against a candidate value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Float,
    /// Accepts either an integer or a float.
    Number,
    Boolean,
    /// Accepts any non-null value.
    Any,
}

/// A single field's validation contract.
#[derive(Clone)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub nullable: bool,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub pattern: Option<Regex>,
    pub enum_values: Option<Vec<String>>,
    pub validator: Option<std::sync::Arc<dyn Fn(&Value) -> bool + Send + Sync>>,
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.field_type == other.field_type
            && self.required == other.required
            && self.nullable == other.nullable
            && self.min_value == other.min_value
            && self.max_value == other.max_value
            && self.enum_values == other.enum_values
            && self.pattern.as_ref().map(Regex::as_str) == other.pattern.as_ref().map(Regex::as_str)
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("required", &self.required)
            .field("nullable", &self.nullable)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("enum_values", &self.enum_values)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Field {
    /// Creates a field requiring the given type, required and non-nullable by default.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Field {
            name: name.into(),
            field_type,
            required: true,
            nullable: false,
            min_value: None,
            max_value: None,
            pattern: None,
            enum_values: None,
            validator: None,
        }
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn with_min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    #[must_use]
    pub fn with_max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Compiles `pattern` eagerly so a malformed regex fails at construction.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| Error::custom(format!("invalid pattern: {e}")))?;
        self.pattern = Some(re);
        Ok(self)
    }

    #[must_use]
    pub fn with_enum(mut self, values: Vec<String>) -> Self {
        self.enum_values = Some(values);
        self
    }

    #[must_use]
    pub fn with_validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(std::sync::Arc::new(f));
        self
    }

    /// Validates a candidate value against this field's constraints.
    pub fn validate(&self, value: &Value) -> Result<()> {
        if matches!(value, Value::Null) {
            return if self.nullable {
                Ok(())
            } else {
                Err(Error::validation(self.name.clone(), "null value is not allowed"))
            };
        }

        match self.field_type {
            FieldType::String => {
                if !value.is_string() {
                    return Err(Error::validation(self.name.clone(), "expected a string"));
                }
            }
            FieldType::Integer => {
                if !value.is_int() {
                    return Err(Error::validation(self.name.clone(), "expected an integer"));
                }
            }
            FieldType::Float => {
                if !value.is_float() {
                    return Err(Error::validation(self.name.clone(), "expected a float"));
                }
            }
            FieldType::Number => {
                if !value.is_number() {
                    return Err(Error::validation(self.name.clone(), "expected a number"));
                }
            }
            FieldType::Boolean => {
                if !value.is_bool() {
                    return Err(Error::validation(self.name.clone(), "expected a boolean"));
                }
            }
            FieldType::Any => {}
        }

        if let Some(min) = self.min_value {
            if let Some(n) = value.as_f64() {
                if n < min {
                    return Err(Error::validation(
                        self.name.clone(),
                        format!("value {n} is below minimum {min}"),
                    ));
                }
            }
        }
        if let Some(max) = self.max_value {
            if let Some(n) = value.as_f64() {
                if n > max {
                    return Err(Error::validation(
                        self.name.clone(),
                        format!("value {n} exceeds maximum {max}"),
                    ));
                }
            }
        }
        if let Some(pattern) = &self.pattern {
            if let Some(s) = value.as_str() {
                if !pattern.is_match(s) {
                    return Err(Error::validation(
                        self.name.clone(),
                        format!("value `{s}` does not match pattern `{}`", pattern.as_str()),
                    ));
                }
            }
        }
        if let Some(enum_values) = &self.enum_values {
            if let Some(s) = value.as_str() {
                if !enum_values.iter().any(|v| v == s) {
                    return Err(Error::validation(
                        self.name.clone(),
                        format!("value `{s}` is not one of {enum_values:?}"),
                    ));
                }
            }
        }
        if let Some(validator) = &self.validator {
            if !validator(value) {
                return Err(Error::validation(self.name.clone(), "custom validation failed"));
            }
        }

        Ok(())
    }
}

/// Validation contract for one named top-level array.
#[derive(Clone, Debug)]
pub struct Schema {
    pub array_name: String,
    pub fields: ToonFieldMap,
    pub strict: bool,
}

/// An insertion-ordered name-to-field map, matching [`crate::ToonMap`]'s
/// ordering discipline.
pub type ToonFieldMap = indexmap::IndexMap<String, Field>;

impl Schema {
    pub fn new(array_name: impl Into<String>, fields: Vec<Field>) -> Self {
        let mut map = ToonFieldMap::new();
        for field in fields {
            map.insert(field.name.clone(), field);
        }
        Schema {
            array_name: array_name.into(),
            fields: map,
            strict: false,
        }
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validates a single record against every declared field.
    pub fn validate_item(&self, item: &ToonMap) -> Result<()> {
        for (name, field) in &self.fields {
            match item.get(name) {
                Some(value) => field.validate(value)?,
                None => {
                    if field.required {
                        return Err(Error::validation(name.clone(), "required field is missing"));
                    }
                }
            }
        }
        if self.strict {
            for key in item.keys() {
                if !self.fields.contains_key(key) {
                    return Err(Error::validation(key.clone(), "unknown field in strict schema"));
                }
            }
        }
        Ok(())
    }

    /// Validates every record in an array.
    pub fn validate_array(&self, items: &[Value]) -> Result<()> {
        for item in items {
            let obj = item
                .as_object()
                .ok_or_else(|| Error::validation(self.array_name.clone(), "array element is not an object"))?;
            self.validate_item(obj)?;
        }
        Ok(())
    }

    /// Validates a full document, requiring the named array to exist.
    pub fn validate(&self, doc: &ToonMap) -> Result<()> {
        let array = doc
            .get(&self.array_name)
            .and_then(Value::as_array)
            .ok_or_else(|| Error::validation(self.array_name.clone(), "array is missing from document"))?;
        self.validate_array(array)
    }
}

/// Validation contract spanning several named arrays in one document.
pub struct MultiSchema {
    pub schemas: Vec<Schema>,
    pub allow_extra_arrays: bool,
}

impl MultiSchema {
    pub fn new(schemas: Vec<Schema>) -> Self {
        MultiSchema {
            schemas,
            allow_extra_arrays: true,
        }
    }

    #[must_use]
    pub fn allow_extra_arrays(mut self, allow: bool) -> Self {
        self.allow_extra_arrays = allow;
        self
    }

    pub fn validate(&self, doc: &ToonMap) -> Result<()> {
        for schema in &self.schemas {
            schema.validate(doc)?;
        }
        if !self.allow_extra_arrays {
            let known: HashSet<&str> = self.schemas.iter().map(|s| s.array_name.as_str()).collect();
            for key in doc.keys() {
                if !known.contains(key.as_str()) {
                    return Err(Error::validation(key.clone(), "array not covered by any schema"));
                }
            }
        }
        Ok(())
    }
}

fn observed_type(value: &Value) -> Option<FieldType> {
    match value {
        Value::String(_) => Some(FieldType::String),
        Value::Int(_) => Some(FieldType::Integer),
        Value::Float(_) => Some(FieldType::Float),
        Value::Bool(_) => Some(FieldType::Boolean),
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => Some(FieldType::Any),
    }
}

/// Infers a [`Schema`] for the named array from observed data.
///
/// The field set is the union of keys across all records; a field absent
/// from some records is marked non-required. A field observed as both
/// `Integer` and `Float` infers `Number`; a single observed type infers that
/// type (plus `nullable` if `Null` was also seen); any other mixture infers
/// `Any`.
pub fn infer_schema(doc: &ToonMap, array_name: &str) -> Result<Schema> {
    let array = doc
        .get(array_name)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::validation(array_name.to_string(), "array is missing from document"))?;

    let mut order: Vec<String> = Vec::new();
    let mut seen_types: indexmap::IndexMap<String, HashSet<FieldType>> = indexmap::IndexMap::new();
    let mut seen_null: indexmap::IndexMap<String, bool> = indexmap::IndexMap::new();
    let mut presence: indexmap::IndexMap<String, usize> = indexmap::IndexMap::new();

    for item in array {
        let obj = item
            .as_object()
            .ok_or_else(|| Error::validation(array_name.to_string(), "array element is not an object"))?;
        for (key, value) in obj.iter() {
            if !seen_types.contains_key(key) {
                order.push(key.clone());
                seen_types.insert(key.clone(), HashSet::new());
                seen_null.insert(key.clone(), false);
                presence.insert(key.clone(), 0);
            }
            *presence.get_mut(key).unwrap() += 1;
            match observed_type(value) {
                Some(t) => {
                    seen_types.get_mut(key).unwrap().insert(t);
                }
                None => {
                    *seen_null.get_mut(key).unwrap() = true;
                }
            }
        }
    }

    let total = array.len();
    let mut fields = Vec::new();
    for key in order {
        let types = &seen_types[&key];
        let nullable = seen_null[&key];
        let field_type = if types.len() > 1 {
            if types.contains(&FieldType::Integer) && types.contains(&FieldType::Float) && types.len() == 2 {
                FieldType::Number
            } else {
                FieldType::Any
            }
        } else if let Some(t) = types.iter().next() {
            *t
        } else {
            FieldType::Any
        };
        let required = presence[&key] == total;
        fields.push(Field {
            name: key,
            field_type,
            required,
            nullable,
            min_value: None,
            max_value: None,
            pattern: None,
            enum_values: None,
            validator: None,
        });
    }

    Ok(Schema::new(array_name.to_string(), fields))
}
