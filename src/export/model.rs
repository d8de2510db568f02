// src/export/model.rs

use crate::models::person::Person;
use crate::models::snapshot::Snapshot;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Work,
    Security,
}

impl EntryKind {
    /// Label written in the `Typ` column.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Work => "Vakt",
            EntryKind::Security => "Säkerhetsansvarig",
        }
    }
}

/// One merged row: a match work entry or a security duty.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub kind: EntryKind,
    pub date: Option<NaiveDate>,
    pub opponent: String,
    pub personnel: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    /// Blank for work entries.
    pub mileage: Option<f64>,
    pub notes: String,
}

impl ExportRow {
    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Rows without any date sort as if dated 1900-01-01.
    fn sort_date(&self) -> NaiveDate {
        self.date
            .or_else(|| NaiveDate::from_ymd_opt(1900, 1, 1))
            .unwrap_or_default()
    }
}

/// Merge work entries and security duties, optionally restricted to one
/// person, newest first. Ties keep work entries ahead of duties.
pub fn build_rows(snapshot: &Snapshot, person: Option<&Person>) -> Vec<ExportRow> {
    let work = snapshot
        .work_hours
        .iter()
        .filter(|wh| person.is_none_or(|p| wh.personnel_id == p.id))
        .map(|wh| {
            let m = snapshot.match_by_id(wh.match_id);
            ExportRow {
                kind: EntryKind::Work,
                date: wh.work_date.or_else(|| m.map(|m| m.date)),
                opponent: m.map(|m| m.opponent.clone()).unwrap_or_default(),
                personnel: snapshot
                    .person(wh.personnel_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                start_time: wh.start_time.clone(),
                end_time: wh.end_time.clone(),
                hours: wh.hours(),
                mileage: None,
                notes: wh.notes.clone(),
            }
        });

    let duties = snapshot
        .security_duties
        .iter()
        .filter(|d| person.is_none_or(|p| d.belongs_to(p)))
        .map(|d| ExportRow {
            kind: EntryKind::Security,
            date: Some(d.date),
            opponent: d.opponent.clone(),
            personnel: d.personnel_name.clone(),
            start_time: "-".to_string(),
            end_time: "-".to_string(),
            hours: d.hours,
            mileage: Some(d.mileage_compensation),
            notes: d.notes.clone(),
        });

    let mut rows: Vec<ExportRow> = work.chain(duties).collect();
    rows.sort_by_key(|r| std::cmp::Reverse(r.sort_date()));
    rows
}
