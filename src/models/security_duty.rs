use super::person::Person;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SecurityDuty {
    pub id: i64,
    pub date: NaiveDate,
    pub opponent: String,              // match or free description
    pub personnel_id: Option<i64>,     // NULL for rows recorded by name only
    pub personnel_name: String,        // display name at the time of recording
    pub hours: f64,
    pub mileage_compensation: f64,
    pub notes: String,
}

impl SecurityDuty {
    /// Ownership test: the foreign key wins when present, otherwise the
    /// recorded name must match exactly.
    pub fn belongs_to(&self, person: &Person) -> bool {
        match self.personnel_id {
            Some(id) => id == person.id,
            None => self.personnel_name == person.name,
        }
    }
}

/// Insert/update payload for a security duty.
#[derive(Debug, Clone)]
pub struct DutyInput {
    pub date: NaiveDate,
    pub opponent: String,
    pub personnel_id: i64,
    pub personnel_name: String,
    pub hours: f64,
    pub mileage_compensation: f64,
    pub notes: String,
}
