// src/export/mod.rs

mod csv_writer;
mod fs_utils;
mod json_writer;
pub mod model;

pub use csv_writer::{CSV_HEADERS, render_csv, write_csv};
pub(crate) use fs_utils::ensure_writable;
pub use json_writer::write_json;
pub use model::{EntryKind, ExportRow, build_rows};

use crate::models::person::Person;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed: {} rows → {}",
        rows,
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// `arbetstid_<name>.<ext>` for one person, `arbetstid_alla.<ext>` for all.
pub fn default_file_name(person: Option<&Person>, format: ExportFormat) -> String {
    let who = person.map(|p| p.name.as_str()).unwrap_or("alla");
    format!("arbetstid_{}.{}", who, format.as_str())
}
