use crate::core::calculator::duration::duration_hours;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_work_hours_for_pair, find_assignment, find_match, find_person, insert_work_hours,
};
use crate::errors::{AppError, AppResult};
use crate::models::work_hour::NewWorkHours;

#[derive(Debug, Clone, PartialEq)]
pub struct SavedTime {
    pub person: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
}

/// Check a manual entry before any write. Both times must be present and
/// span a strictly positive duration.
pub fn validate_entry(start: Option<&str>, end: Option<&str>) -> AppResult<(String, String, f64)> {
    let (Some(start), Some(end)) = (start, end) else {
        return Err(AppError::Validation(
            "Both start and end time are required.".into(),
        ));
    };

    let hours = duration_hours(start, end);
    if hours <= 0.0 {
        return Err(AppError::Validation(format!(
            "End time {} must be later than start time {}.",
            end, start
        )));
    }

    Ok((start.to_string(), end.to_string(), hours))
}

pub struct TimeEntryLogic;

impl TimeEntryLogic {
    /// Replace the work-hour entry of a working pair.
    pub fn save(
        pool: &mut DbPool,
        match_id: i64,
        personnel_id: i64,
        start: Option<&str>,
        end: Option<&str>,
        notes: &str,
    ) -> AppResult<SavedTime> {
        let (start, end, hours) = validate_entry(start, end)?;

        pool.with_tx(|conn| {
            let m = find_match(conn, match_id)?.ok_or(AppError::MatchNotFound(match_id))?;
            let person = find_person(conn, personnel_id)?
                .ok_or_else(|| AppError::PersonNotFound(personnel_id.to_string()))?;

            let working = find_assignment(conn, match_id, personnel_id)?
                .is_some_and(|a| a.is_working);
            if !working {
                return Err(AppError::Validation(format!(
                    "{} is not working the match against {}.",
                    person.name, m.opponent
                )));
            }

            delete_work_hours_for_pair(conn, match_id, personnel_id)?;
            insert_work_hours(
                conn,
                &NewWorkHours {
                    match_id,
                    personnel_id,
                    start_time: start.clone(),
                    end_time: end.clone(),
                    work_date: m.date,
                    notes: notes.trim().to_string(),
                },
            )?;

            audit(
                conn,
                "time",
                &format!("match {} / {}", match_id, person.name),
                &format!("{} - {} ({}h)", start, end, hours),
            );

            Ok(SavedTime {
                person: person.name,
                start,
                end,
                hours,
            })
        })
    }
}
