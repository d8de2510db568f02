use chrono::NaiveDate;
use serde::Serialize;

/// Note stored on entries created by the assignment toggle.
pub const AUTO_NOTE: &str = "Automatiskt registrerad (4,5h standard)";

#[derive(Debug, Clone, Serialize)]
pub struct WorkHourEntry {
    pub id: i64,
    pub match_id: i64,
    pub personnel_id: i64,
    pub start_time: String,          // ⇔ work_hours.start_time ("HH:MM")
    pub end_time: String,            // ⇔ work_hours.end_time ("HH:MM")
    pub total_hours: Option<f64>,    // ⇔ work_hours.total_hours (generated column)
    pub work_date: Option<NaiveDate>, // ⇔ work_hours.work_date
    pub notes: String,
}

impl WorkHourEntry {
    /// Hours as counted by every sum: a missing value counts as zero.
    pub fn hours(&self) -> f64 {
        self.total_hours.unwrap_or(0.0)
    }

    pub fn is_for(&self, match_id: i64, personnel_id: i64) -> bool {
        self.match_id == match_id && self.personnel_id == personnel_id
    }
}

/// Write-intent for a new work-hour row; the store derives `total_hours`.
#[derive(Debug, Clone)]
pub struct NewWorkHours {
    pub match_id: i64,
    pub personnel_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub work_date: NaiveDate,
    pub notes: String,
}
