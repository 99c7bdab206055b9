//! emprec-formats — source-format adapters for emprec.
//!
//! Each adapter turns the text of one document into [`RawRecordFields`], one
//! per record, without coercing anything. The shared loader then runs every
//! raw record through the [`Normalizer`] and gathers a [`RecordCollection`].
//! A load either yields every record or fails as a whole.

mod document;
pub mod io_csv;
pub mod io_json;
pub mod io_xml;
pub mod io_yaml;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use emprec_core::{NormalizeError, Normalizer, RawRecordFields, RecordCollection};
use thiserror::Error;

// ---------------------------------------------------------------------------
// SourceFormat
// ---------------------------------------------------------------------------

/// Which serialization a document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Json,
    Csv,
    Xml,
    Yaml,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 4] = [
        SourceFormat::Json,
        SourceFormat::Csv,
        SourceFormat::Xml,
        SourceFormat::Yaml,
    ];

    /// Detect from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Json => write!(f, "json"),
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Xml => write!(f, "xml"),
            SourceFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(SourceFormat::Json),
            "csv" => Ok(SourceFormat::Csv),
            "xml" => Ok(SourceFormat::Xml),
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            other => Err(format!("unknown format: {other} (expected json, csv, xml or yaml)")),
        }
    }
}

// ---------------------------------------------------------------------------
// Adapter trait
// ---------------------------------------------------------------------------

/// Trait implemented by each format adapter.
///
/// `extract` fails only when the document as a whole cannot be read (bad
/// syntax, no `records` root). Field-level problems are left to the
/// normalizer.
pub trait FormatAdapter: Send + Sync {
    fn format(&self) -> SourceFormat;

    fn extract(&self, input: &str) -> Result<Vec<RawRecordFields>, String>;
}

/// The adapter responsible for `format`.
pub fn adapter_for(format: SourceFormat) -> &'static dyn FormatAdapter {
    match format {
        SourceFormat::Json => &io_json::JsonAdapter,
        SourceFormat::Csv => &io_csv::CsvAdapter,
        SourceFormat::Xml => &io_xml::XmlAdapter,
        SourceFormat::Yaml => &io_yaml::YamlAdapter,
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A failed load. Either kind aborts the whole collection.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document could not be read or has no usable `records` root.
    #[error("cannot read {origin}: {reason}")]
    SourceRead { origin: String, reason: String },

    /// One record failed normalization.
    #[error("record {index} of {origin}")]
    Record {
        origin: String,
        index: usize,
        #[source]
        source: NormalizeError,
    },
}

impl LoadError {
    /// The normalization failure, if this is a per-record error.
    pub fn normalize_error(&self) -> Option<&NormalizeError> {
        match self {
            LoadError::Record { source, .. } => Some(source),
            LoadError::SourceRead { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// A collection together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSource {
    pub origin: String,
    pub format: SourceFormat,
    pub records: RecordCollection,
}

/// Load `path` with its format detected from the extension and default
/// normalization options.
pub fn load_path(path: &Path) -> Result<LoadedSource, LoadError> {
    load_path_with(path, None, &Normalizer::default())
}

/// Load `path`, forcing `format` when given.
pub fn load_path_with(
    path: &Path,
    format: Option<SourceFormat>,
    normalizer: &Normalizer,
) -> Result<LoadedSource, LoadError> {
    let origin = path.display().to_string();
    let format = match format.or_else(|| SourceFormat::from_path(path)) {
        Some(format) => format,
        None => {
            return Err(LoadError::SourceRead {
                origin,
                reason: "cannot detect format from file extension".to_string(),
            })
        }
    };

    let text = std::fs::read_to_string(path).map_err(|e| LoadError::SourceRead {
        origin: origin.clone(),
        reason: e.to_string(),
    })?;

    let records = parse_origin(&text, format, normalizer, &origin)?;
    Ok(LoadedSource {
        origin,
        format,
        records,
    })
}

/// Parse an in-memory document.
pub fn parse_str(
    text: &str,
    format: SourceFormat,
    normalizer: &Normalizer,
) -> Result<RecordCollection, LoadError> {
    parse_origin(text, format, normalizer, &format!("<{format} input>"))
}

fn parse_origin(
    text: &str,
    format: SourceFormat,
    normalizer: &Normalizer,
    origin: &str,
) -> Result<RecordCollection, LoadError> {
    let raws = adapter_for(format)
        .extract(text)
        .map_err(|reason| LoadError::SourceRead {
            origin: origin.to_string(),
            reason,
        })?;

    let records = raws
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            tracing::debug!(origin, index, fields = raw.len(), "normalizing record");
            normalizer.normalize(raw).map_err(|source| LoadError::Record {
                origin: origin.to_string(),
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(origin, %format, records = records.len(), "loaded collection");
    Ok(RecordCollection::new(records))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
