// src/export/csv_writer.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ExportRow, notify_export_success};
use crate::ui::messages::info;
use crate::utils::formatting::fmt_number;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADERS: [&str; 9] = [
    "Typ",
    "Datum",
    "Match/Uppdrag",
    "Personal",
    "Starttid",
    "Sluttid",
    "Timmar",
    "Milersättning",
    "Anteckningar",
];

/// Flat CSV record in `CSV_HEADERS` order.
#[derive(Serialize)]
struct CsvRecord<'a> {
    kind: &'static str,
    date: String,
    opponent: &'a str,
    personnel: &'a str,
    start_time: &'a str,
    end_time: &'a str,
    hours: String,
    mileage: String,
    notes: &'a str,
}

impl<'a> From<&'a ExportRow> for CsvRecord<'a> {
    fn from(r: &'a ExportRow) -> Self {
        Self {
            kind: r.kind.label(),
            date: r.date_str(),
            opponent: &r.opponent,
            personnel: &r.personnel,
            start_time: &r.start_time,
            end_time: &r.end_time,
            hours: fmt_number(r.hours),
            mileage: r.mileage.map(fmt_number).unwrap_or_default(),
            notes: &r.notes,
        }
    }
}

/// Serialise rows into any writer. Text fields are quoted, numbers are not.
fn write_rows<W: Write>(mut out: W, rows: &[ExportRow]) -> AppResult<W> {
    // Header is written by hand so an empty export still carries it.
    writeln!(out, "{}", CSV_HEADERS.join(","))?;

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(out);

    for r in rows {
        wtr.serialize(CsvRecord::from(r))?;
    }

    wtr.flush()?;
    wtr.into_inner()
        .map_err(|e| AppError::Export(e.to_string()))
}

/// CSV document as a string.
pub fn render_csv(rows: &[ExportRow]) -> AppResult<String> {
    let bytes = write_rows(Vec::new(), rows)?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

pub fn write_csv(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = std::fs::File::create(path)?;
    write_rows(file, rows)?;

    notify_export_success("CSV", rows.len(), path);
    Ok(())
}
