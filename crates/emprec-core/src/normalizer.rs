//! Normalizer — turns [`RawRecordFields`] into canonical [`Record`] values.
//!
//! Adapters only extract; every coercion, default and required-field check
//! happens here, once, whatever the source format was. Normalization is
//! all-or-nothing: the first bad field aborts the record.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::NormalizeError;
use crate::types::{Note, Record};

/// Separator inside `working_years` and `hobbies` text cells.
pub const LIST_SEPARATOR: char = ',';
/// Separator inside the parallel `notes_*` text cells.
pub const NOTES_SEPARATOR: char = ';';

/// Parallel note columns used by flat sources such as CSV.
pub const NOTES_YEAR: &str = "notes_year";
pub const NOTES_WORKING_MONTHS: &str = "notes_working_months";
pub const NOTES_SATISFIED: &str = "notes_satisfied";

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// A field value as extracted by an adapter, before any coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Already-typed value from a self-describing format (JSON, YAML).
    Native(Value),
    /// Text from a CSV cell or an XML element.
    Text(String),
    /// Texts of repeated child elements (`<year>`, `<hobby>`).
    Items(Vec<String>),
    /// Repeated structured children (`<note>`).
    Nested(Vec<RawRecordFields>),
}

impl RawValue {
    fn is_null(&self) -> bool {
        matches!(self, RawValue::Native(Value::Null))
    }

    /// Rendering used in `MalformedField` errors.
    fn describe(&self) -> String {
        match self {
            RawValue::Native(Value::String(s)) | RawValue::Text(s) => s.clone(),
            RawValue::Native(v) => v.to_string(),
            RawValue::Items(items) => items.join(","),
            RawValue::Nested(children) => format!("<{} nested entries>", children.len()),
        }
    }
}

/// Field name → raw value for one record, as produced by an adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecordFields {
    fields: HashMap<String, RawValue>,
}

impl RawRecordFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap every member of a JSON object as [`RawValue::Native`].
    pub fn from_json_object(object: serde_json::Map<String, Value>) -> Self {
        Self {
            fields: object
                .into_iter()
                .map(|(k, v)| (k, RawValue::Native(v)))
                .collect(),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: RawValue) {
        self.fields.insert(field.into(), value);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, field: impl Into<String>, value: RawValue) -> Self {
        self.insert(field, value);
        self
    }

    /// Builder-style insert of a [`RawValue::Text`].
    pub fn with_text(self, field: impl Into<String>, text: impl Into<String>) -> Self {
        self.with(field, RawValue::Text(text.into()))
    }

    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Present and not `null`.
    fn optional(&self, field: &str) -> Option<&RawValue> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    fn required(&self, field: &str) -> Result<&RawValue, NormalizeError> {
        self.optional(field)
            .ok_or_else(|| NormalizeError::missing(field))
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How text booleans are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolPolicy {
    /// `"true"` (any case) is true; every other token is false.
    #[default]
    Lenient,
    /// Only `"true"` and `"false"` (any case) are accepted.
    Strict,
}

/// What to do when the parallel `notes_*` lists differ in length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotesMismatch {
    /// Reject the record with a `MalformedField` naming `notes`.
    #[default]
    Fail,
    /// Zip up to the shortest list and drop the rest.
    Truncate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub booleans: BoolPolicy,
    pub notes_mismatch: NotesMismatch,
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Converts raw records into canonical ones under a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

/// Normalize with default options.
pub fn normalize(raw: &RawRecordFields) -> Result<Record, NormalizeError> {
    Normalizer::default().normalize(raw)
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> NormalizeOptions {
        self.options
    }

    pub fn normalize(&self, raw: &RawRecordFields) -> Result<Record, NormalizeError> {
        Ok(Record {
            name: self.string(raw, "name")?,
            age: self.integer(raw, "age")?,
            id: self.integer(raw, "id")?,
            salary: self.integer(raw, "salary")?,
            working_years: self.integer_list(raw, "working_years")?,
            is_working: self.boolean(raw, "is_working")?,
            notes: self.notes(raw)?,
            hobbies: self.string_list(raw, "hobbies")?,
        })
    }

    fn string(&self, raw: &RawRecordFields, field: &str) -> Result<String, NormalizeError> {
        match raw.required(field)? {
            RawValue::Native(Value::String(s)) | RawValue::Text(s) => Ok(s.clone()),
            other => Err(NormalizeError::malformed(field, other.describe())),
        }
    }

    fn integer(&self, raw: &RawRecordFields, field: &str) -> Result<i64, NormalizeError> {
        native_or_text_integer(field, raw.required(field)?)
    }

    fn boolean(&self, raw: &RawRecordFields, field: &str) -> Result<bool, NormalizeError> {
        match raw.required(field)? {
            RawValue::Native(Value::Bool(b)) => Ok(*b),
            RawValue::Native(Value::String(s)) | RawValue::Text(s) => self.coerce_bool(field, s),
            other => Err(NormalizeError::malformed(field, other.describe())),
        }
    }

    fn integer_list(&self, raw: &RawRecordFields, field: &str) -> Result<Vec<i64>, NormalizeError> {
        match raw.required(field)? {
            RawValue::Native(Value::Array(items)) => items
                .iter()
                .map(|item| native_integer(field, item))
                .collect(),
            RawValue::Native(Value::String(s)) | RawValue::Text(s) => split_list(s)
                .into_iter()
                .map(|part| parse_integer(field, part))
                .collect(),
            RawValue::Items(items) => items
                .iter()
                .map(|item| parse_integer(field, item))
                .collect(),
            other => Err(NormalizeError::malformed(field, other.describe())),
        }
    }

    fn string_list(&self, raw: &RawRecordFields, field: &str) -> Result<Vec<String>, NormalizeError> {
        let Some(value) = raw.optional(field) else {
            return Ok(Vec::new());
        };
        match value {
            RawValue::Native(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(NormalizeError::malformed(field, other.to_string())),
                })
                .collect(),
            RawValue::Native(Value::String(s)) | RawValue::Text(s) => Ok(split_list(s)
                .into_iter()
                .map(|part| part.trim_matches('"').trim().to_string())
                .collect()),
            RawValue::Items(items) => Ok(items.iter().map(|s| s.trim().to_string()).collect()),
            other => Err(NormalizeError::malformed(field, other.describe())),
        }
    }

    fn notes(&self, raw: &RawRecordFields) -> Result<Vec<Note>, NormalizeError> {
        match raw.optional("notes") {
            Some(RawValue::Native(Value::Array(items))) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(object) => {
                        self.note(&RawRecordFields::from_json_object(object.clone()), i)
                    }
                    other => Err(NormalizeError::malformed(format!("notes[{i}]"), other.to_string())),
                })
                .collect(),
            Some(RawValue::Nested(children)) => children
                .iter()
                .enumerate()
                .map(|(i, child)| self.note(child, i))
                .collect(),
            Some(other) => Err(NormalizeError::malformed("notes", other.describe())),
            None => self.parallel_notes(raw),
        }
    }

    fn note(&self, raw: &RawRecordFields, index: usize) -> Result<Note, NormalizeError> {
        let scoped = move |e: NormalizeError| within(e, &format!("notes[{index}]"));
        Ok(Note {
            year: self.integer(raw, "year").map_err(scoped)?,
            working_months: self.integer(raw, "working_months").map_err(scoped)?,
            satisfied: self.boolean(raw, "satisfied").map_err(scoped)?,
        })
    }

    /// Zip the `;`-separated `notes_*` columns of a flat source.
    fn parallel_notes(&self, raw: &RawRecordFields) -> Result<Vec<Note>, NormalizeError> {
        let years = parallel_column(raw, NOTES_YEAR)?;
        let months = parallel_column(raw, NOTES_WORKING_MONTHS)?;
        let satisfied = parallel_column(raw, NOTES_SATISFIED)?;

        let equal = years.len() == months.len() && years.len() == satisfied.len();
        let count = match (equal, self.options.notes_mismatch) {
            (true, _) => years.len(),
            (false, NotesMismatch::Truncate) => years.len().min(months.len()).min(satisfied.len()),
            (false, NotesMismatch::Fail) => {
                return Err(NormalizeError::malformed(
                    "notes",
                    format!(
                        "{NOTES_YEAR} has {} entries, {NOTES_WORKING_MONTHS} has {}, {NOTES_SATISFIED} has {}",
                        years.len(),
                        months.len(),
                        satisfied.len()
                    ),
                ))
            }
        };

        let mut notes = Vec::with_capacity(count);
        for i in 0..count {
            if years[i].trim().is_empty() {
                continue;
            }
            notes.push(Note {
                year: parse_integer(NOTES_YEAR, years[i])?,
                working_months: parse_integer(NOTES_WORKING_MONTHS, months[i])?,
                satisfied: self.coerce_bool(NOTES_SATISFIED, satisfied[i])?,
            });
        }
        Ok(notes)
    }

    fn coerce_bool(&self, field: &str, text: &str) -> Result<bool, NormalizeError> {
        if text.eq_ignore_ascii_case("true") {
            return Ok(true);
        }
        if text.eq_ignore_ascii_case("false") {
            return Ok(false);
        }
        match self.options.booleans {
            BoolPolicy::Strict => Err(NormalizeError::malformed(field, text)),
            BoolPolicy::Lenient => {
                if !text.is_empty() {
                    tracing::warn!(field, value = text, "unrecognised boolean token read as false");
                }
                Ok(false)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn within(err: NormalizeError, prefix: &str) -> NormalizeError {
    match err {
        NormalizeError::MissingField { field } => NormalizeError::missing(format!("{prefix}.{field}")),
        NormalizeError::MalformedField { field, value } => {
            NormalizeError::malformed(format!("{prefix}.{field}"), value)
        }
    }
}

fn parse_integer(field: &str, text: &str) -> Result<i64, NormalizeError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| NormalizeError::malformed(field, text))
}

fn native_integer(field: &str, value: &Value) -> Result<i64, NormalizeError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| NormalizeError::malformed(field, n.to_string())),
        Value::String(s) => parse_integer(field, s),
        other => Err(NormalizeError::malformed(field, other.to_string())),
    }
}

fn native_or_text_integer(field: &str, value: &RawValue) -> Result<i64, NormalizeError> {
    match value {
        RawValue::Native(v) => native_integer(field, v),
        RawValue::Text(s) => parse_integer(field, s),
        other => Err(NormalizeError::malformed(field, other.describe())),
    }
}

/// Split a `,`-separated cell; surrounding quotes and blank cells give `[]`.
fn split_list(text: &str) -> Vec<&str> {
    let inner = text.trim().trim_matches('"');
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(LIST_SEPARATOR).map(str::trim).collect()
}

fn parallel_column<'a>(raw: &'a RawRecordFields, field: &str) -> Result<Vec<&'a str>, NormalizeError> {
    match raw.optional(field) {
        None => Ok(Vec::new()),
        Some(RawValue::Native(Value::String(s))) | Some(RawValue::Text(s)) => {
            if s.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(s.split(NOTES_SEPARATOR).collect())
            }
        }
        Some(other) => Err(NormalizeError::malformed(field, other.describe())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
