//! Assignment toggle for one (match, person) pair.
//!
//! Unassigned → Working → NotWorking → Working → ...
//! Unassigned only exists before the first assignment row is written.

use crate::core::calculator::worktime::derive_work_times;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_work_hours_for_pair, find_assignment, find_match, find_person, find_work_hours_id,
    insert_assignment, insert_work_hours, set_assignment_working,
};
use crate::errors::{AppError, AppResult};
use crate::models::assignment::Assignment;
use crate::models::matches::Match;
use crate::models::work_hour::{AUTO_NOTE, NewWorkHours};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentState {
    Unassigned,
    Working,
    NotWorking,
}

impl AssignmentState {
    pub fn of(assignment: Option<&Assignment>) -> Self {
        match assignment {
            None => AssignmentState::Unassigned,
            Some(a) if a.is_working => AssignmentState::Working,
            Some(_) => AssignmentState::NotWorking,
        }
    }

    /// State reached by one toggle.
    pub fn next(self) -> Self {
        match self {
            AssignmentState::Unassigned | AssignmentState::NotWorking => AssignmentState::Working,
            AssignmentState::Working => AssignmentState::NotWorking,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: AssignmentState,
    pub to: AssignmentState,
    pub person: String,
    pub opponent: String,
    /// A default work-hour entry was written.
    pub hours_created: bool,
    /// Work-hour entries deleted for the pair.
    pub hours_removed: usize,
}

/// Create the default work window for the pair unless one already exists.
/// Returns whether a row was inserted.
pub fn ensure_default_hours(conn: &Connection, m: &Match, personnel_id: i64) -> AppResult<bool> {
    if find_work_hours_id(conn, m.id, personnel_id)?.is_some() {
        return Ok(false);
    }

    let times = derive_work_times(m.kickoff());
    insert_work_hours(
        conn,
        &NewWorkHours {
            match_id: m.id,
            personnel_id,
            start_time: times.start,
            end_time: times.end,
            work_date: m.date,
            notes: AUTO_NOTE.to_string(),
        },
    )?;
    Ok(true)
}

pub struct AssignLogic;

impl AssignLogic {
    /// Flip the working flag for a pair and keep its work hours in step.
    ///
    /// Assignment and work-hour writes share one transaction, so a failure
    /// leaves both untouched.
    pub fn toggle(pool: &mut DbPool, match_id: i64, personnel_id: i64) -> AppResult<Transition> {
        pool.with_tx(|conn| {
            let m = find_match(conn, match_id)?.ok_or(AppError::MatchNotFound(match_id))?;
            let person = find_person(conn, personnel_id)?
                .ok_or_else(|| AppError::PersonNotFound(personnel_id.to_string()))?;

            let existing = find_assignment(conn, match_id, personnel_id)?;
            let from = AssignmentState::of(existing.as_ref());
            let to = from.next();
            let working = to == AssignmentState::Working;

            match existing {
                Some(a) => set_assignment_working(conn, a.id, working)?,
                None => {
                    insert_assignment(conn, match_id, personnel_id, true)?;
                }
            }

            let (hours_created, hours_removed) = if working {
                (ensure_default_hours(conn, &m, personnel_id)?, 0)
            } else {
                (false, delete_work_hours_for_pair(conn, match_id, personnel_id)?)
            };

            audit(
                conn,
                "toggle",
                &format!("match {} / {}", match_id, person.name),
                &format!("{:?} → {:?}", from, to),
            );

            Ok(Transition {
                from,
                to,
                person: person.name,
                opponent: m.opponent,
                hours_created,
                hours_removed,
            })
        })
    }
}
