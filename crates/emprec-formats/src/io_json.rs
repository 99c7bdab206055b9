//! JSON adapter.
//!
//! The document is `{ "records": [ {...}, ... ] }` with native types, so
//! every member is handed over as [`RawValue::Native`](emprec_core::RawValue::Native).

use emprec_core::RawRecordFields;

use crate::{document, FormatAdapter, SourceFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAdapter;

impl FormatAdapter for JsonAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn extract(&self, input: &str) -> Result<Vec<RawRecordFields>, String> {
        let document: serde_json::Value =
            serde_json::from_str(input).map_err(|e| format!("invalid JSON: {e}"))?;
        document::records(document)
    }
}
