//! emprec-core — canonical employee records and the normalizer that builds them.
//!
//! # Architecture
//!
//! ```text
//! Adapter (json | csv | xml | yaml) ──► RawRecordFields ──► Normalizer ──► Record ──► View
//! ```
//!
//! Adapters live in `emprec-formats` and only extract. This crate owns the
//! single validation boundary: every coercion and default is applied by
//! [`Normalizer`].

pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;

pub use error::NormalizeError;
pub use normalizer::{normalize, NormalizeOptions, Normalizer, RawRecordFields, RawValue};
pub use types::{Note, Record, RecordCollection};
