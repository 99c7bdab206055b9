//! Errors raised while normalizing a single record.

use thiserror::Error;

/// Why one raw record could not become a canonical [`Record`](crate::Record).
///
/// Field names are the canonical names (`age`, `notes`, ...) or, for the
/// parallel CSV note columns, the column name (`notes_year`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("malformed value {value:?} for field `{field}`")]
    MalformedField { field: String, value: String },
}

impl NormalizeError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn malformed(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedField {
            field: field.into(),
            value: value.into(),
        }
    }

    /// The field this error names.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::MalformedField { field, .. } => field,
        }
    }
}
