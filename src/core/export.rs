use crate::errors::AppResult;
use crate::export::{
    ExportFormat, build_rows, default_file_name, ensure_writable, write_csv, write_json,
};
use crate::models::person::Person;
use crate::models::snapshot::Snapshot;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the merged work/duty rows to `file` (or the default
    /// `arbetstid_*` name in the current directory). Returns the path written.
    pub fn export(
        snapshot: &Snapshot,
        person: Option<&Person>,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(default_file_name(person, format)),
        };

        ensure_writable(&path, force)?;

        let rows = build_rows(snapshot, person);
        if rows.is_empty() {
            warning("No work entries or security duties to export.");
        }

        match format {
            ExportFormat::Csv => write_csv(&rows, &path)?,
            ExportFormat::Json => write_json(&rows, &path)?,
        }

        Ok(path)
    }
}
