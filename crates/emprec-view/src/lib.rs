//! emprec-view — renders record collections as human-readable text.
//!
//! Output is for people, not machines; nothing here feeds back into loading.
//! Two layouts are available, picked by [`ViewStyle`]:
//!
//! - **Blocks**: one `Label: value` line per field, fields in fixed order,
//!   a dashed separator after every record.
//! - **Table**: a header row plus one aligned row per record.

mod table;

use std::io::{self, Write};

use emprec_core::config::{ViewConfig, ViewStyle};
use emprec_core::{Note, Record, RecordCollection};

/// Labels in rendering order. Shared by both layouts.
pub const LABELS: [&str; 8] = [
    "Name",
    "Age",
    "ID",
    "Salary",
    "Working Years",
    "Currently Working",
    "Notes",
    "Hobbies",
];

/// Shown in place of an empty list.
pub const EMPTY: &str = "-";

/// Write `title` as a heading, then `records` in the configured layout.
pub fn render<W: Write>(
    out: &mut W,
    title: &str,
    records: &RecordCollection,
    view: &ViewConfig,
) -> io::Result<()> {
    writeln!(out, "=== {title} ===")?;
    match view.style {
        ViewStyle::Blocks => render_blocks(out, records, usize::from(view.separator_width)),
        ViewStyle::Table => table::render(out, records),
    }
}

/// Render into a `String`; convenient for tests and snapshotting.
pub fn render_to_string(title: &str, records: &RecordCollection, view: &ViewConfig) -> String {
    let mut buf = Vec::new();
    render(&mut buf, title, records, view).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

fn render_blocks<W: Write>(out: &mut W, records: &RecordCollection, width: usize) -> io::Result<()> {
    let separator = "-".repeat(width);
    for record in records {
        for (label, value) in LABELS.iter().zip(cells(record)) {
            writeln!(out, "{label}: {value}")?;
        }
        writeln!(out, "{separator}")?;
    }
    Ok(())
}

/// Field values as display strings, in [`LABELS`] order.
pub(crate) fn cells(record: &Record) -> [String; 8] {
    [
        record.name.clone(),
        record.age.to_string(),
        record.id.to_string(),
        record.salary.to_string(),
        join(record.working_years.iter()),
        record.is_working.to_string(),
        join(record.notes.iter().map(note)),
        join(record.hobbies.iter()),
    ]
}

fn note(note: &Note) -> String {
    let satisfied = if note.satisfied { "satisfied" } else { "not satisfied" };
    format!("{} ({} months, {satisfied})", note.year, note.working_months)
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    let joined = items.map(|i| i.to_string()).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        EMPTY.to_string()
    } else {
        joined
    }
}
