//! emprec — employee records from JSON, CSV, XML and YAML.
//!
//! This crate wires the three workspace layers into the `emprec` binary and
//! re-exports them so integration tests and benches can import one crate.
//!
//! # Architecture
//!
//! ```text
//! emprec-formats (adapters) ──► emprec-core (normalizer) ──► emprec-view (presenter)
//! ```
//!
//! Everything is synchronous: each source is read fully, normalized as a
//! whole, then printed.

pub mod commands;

pub use emprec_core;
pub use emprec_formats;
pub use emprec_view;

pub use emprec_core::{Note, Record, RecordCollection};
pub use emprec_formats::{LoadError, SourceFormat};
