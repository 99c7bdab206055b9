//! CSV adapter.
//!
//! One row per record, keyed by the header row. Every cell is handed over as
//! [`RawValue::Text`]; composite columns keep their in-cell encodings:
//!
//! | Column | Encoding |
//! |--------|----------|
//! | `working_years`, `hobbies` | `,`-separated inside one quoted cell |
//! | `notes_year`, `notes_working_months`, `notes_satisfied` | `;`-separated, zipped by position |
//!
//! Stray `"` characters around a `name` cell are stripped; whitespace is kept.

use emprec_core::{RawRecordFields, RawValue};

use crate::{FormatAdapter, SourceFormat};

/// Header row written for canonical records, in column order.
pub const COLUMNS: [&str; 10] = [
    "name",
    "age",
    "id",
    "salary",
    "working_years",
    "is_working",
    "notes_year",
    "notes_working_months",
    "notes_satisfied",
    "hobbies",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvAdapter;

impl FormatAdapter for CsvAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }

    fn extract(&self, input: &str) -> Result<Vec<RawRecordFields>, String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(input.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| format!("invalid CSV header: {e}"))?
            .clone();
        if headers.iter().all(str::is_empty) {
            return Err("missing CSV header row".to_string());
        }

        let mut raws = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| format!("invalid CSV row: {e}"))?;
            let mut raw = RawRecordFields::new();
            for (column, cell) in headers.iter().zip(row.iter()) {
                let cell = if column == "name" { cell.trim_matches('"') } else { cell };
                raw.insert(column, RawValue::Text(cell.to_string()));
            }
            raws.push(raw);
        }
        Ok(raws)
    }
}
