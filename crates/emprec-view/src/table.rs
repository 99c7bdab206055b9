//! Aligned table layout.

use std::io::{self, Write};

use emprec_core::RecordCollection;

use crate::{cells, LABELS};

const GAP: &str = "  ";

pub(crate) fn render<W: Write>(out: &mut W, records: &RecordCollection) -> io::Result<()> {
    let header: Vec<String> = LABELS.iter().map(|l| l.to_uppercase()).collect();
    let rows: Vec<[String; 8]> = records.iter().map(cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, header.iter(), &widths)?;
    for row in &rows {
        write_row(out, row.iter(), &widths)?;
    }
    Ok(())
}

fn write_row<'a, W: Write>(
    out: &mut W,
    cells: impl Iterator<Item = &'a String>,
    widths: &[usize],
) -> io::Result<()> {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(GAP);
    writeln!(out, "{}", line.trim_end())
}
