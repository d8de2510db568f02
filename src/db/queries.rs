use crate::errors::{AppError, AppResult};
use crate::models::assignment::Assignment;
use crate::models::matches::{Match, MatchType};
use crate::models::person::{Person, Role};
use crate::models::security_duty::{DutyInput, SecurityDuty};
use crate::models::snapshot::Snapshot;
use crate::models::work_hour::{NewWorkHours, WorkHourEntry};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::HashMap;

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_date(idx: usize, s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(s.to_string())))
}

fn fmt_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// personnel
// ---------------------------------------------------------------------------

fn map_person(row: &Row) -> Result<Person> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidRole(role_str.clone())))?;

    Ok(Person {
        id: row.get("id")?,
        name: row.get("name")?,
        role,
        security_responsible: row.get::<_, i32>("security_responsible")? == 1,
    })
}

/// All personnel in roster order.
pub fn load_personnel(conn: &Connection) -> AppResult<Vec<Person>> {
    let mut stmt =
        conn.prepare("SELECT id, name, role, security_responsible FROM personnel")?;
    let rows = stmt.query_map([], map_person)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    out.sort_by(Person::roster_order);
    Ok(out)
}

pub fn find_person(conn: &Connection, id: i64) -> AppResult<Option<Person>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, role, security_responsible FROM personnel WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_person).optional()?)
}

pub fn find_person_by_name(conn: &Connection, name: &str) -> AppResult<Option<Person>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, role, security_responsible FROM personnel WHERE name = ?1",
    )?;
    Ok(stmt.query_row([name], map_person).optional()?)
}

pub fn insert_person(
    conn: &Connection,
    name: &str,
    role: Role,
    security_responsible: bool,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO personnel (name, role, security_responsible) VALUES (?1, ?2, ?3)",
        params![name, role.to_db_str(), security_responsible as i32],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_person(
    conn: &Connection,
    id: i64,
    role: Role,
    security_responsible: bool,
) -> AppResult<usize> {
    Ok(conn.execute(
        "UPDATE personnel SET role = ?1, security_responsible = ?2 WHERE id = ?3",
        params![role.to_db_str(), security_responsible as i32, id],
    )?)
}

/// Remove a person together with their assignments and work hours.
/// Security duties keep their name snapshot.
pub fn delete_person_cascade(conn: &Connection, id: i64) -> AppResult<usize> {
    conn.execute("DELETE FROM assignments WHERE personnel_id = ?1", [id])?;
    conn.execute("DELETE FROM work_hours WHERE personnel_id = ?1", [id])?;
    Ok(conn.execute("DELETE FROM personnel WHERE id = ?1", [id])?)
}

// ---------------------------------------------------------------------------
// matches & assignments
// ---------------------------------------------------------------------------

/// Insert payload for a match, already validated.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub date: NaiveDate,
    pub time: String,
    pub opponent: String,
    pub match_type: MatchType,
    pub distance_miles: Option<f64>,
    pub required_guards: u32,
}

pub fn insert_match(conn: &Connection, m: &NewMatch) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO matches (date, time, opponent, match_type, distance_miles, required_guards)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            fmt_date(&m.date),
            m.time,
            m.opponent,
            m.match_type.to_db_str(),
            m.distance_miles,
            m.required_guards,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn map_assignment(row: &Row) -> Result<Assignment> {
    Ok(Assignment {
        id: row.get("id")?,
        match_id: row.get("match_id")?,
        personnel_id: row.get("personnel_id")?,
        is_working: row.get::<_, i32>("is_working")? == 1,
    })
}

fn map_match(row: &Row) -> Result<Match> {
    let date_str: String = row.get("date")?;
    let type_str: Option<String> = row.get("match_type")?;

    Ok(Match {
        id: row.get("id")?,
        date: parse_db_date(1, &date_str)?,
        time: row.get("time")?,
        opponent: row.get("opponent")?,
        match_type: MatchType::from_db_str(type_str.as_deref().unwrap_or("home")),
        distance_miles: row.get("distance_miles")?,
        required_guards: row.get::<_, Option<u32>>("required_guards")?.unwrap_or(4),
        assignments: Vec::new(),
    })
}

/// One match with its assignments.
pub fn find_match(conn: &Connection, id: i64) -> AppResult<Option<Match>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, opponent, match_type, distance_miles, required_guards
         FROM matches WHERE id = ?1",
    )?;
    let Some(mut m) = stmt.query_row([id], map_match).optional()? else {
        return Ok(None);
    };

    let mut stmt = conn.prepare(
        "SELECT id, match_id, personnel_id, is_working FROM assignments
         WHERE match_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([id], map_assignment)?;
    for r in rows {
        m.assignments.push(r?);
    }
    Ok(Some(m))
}

/// Matches ordered by date, each carrying its assignments.
pub fn load_matches(conn: &Connection) -> AppResult<Vec<Match>> {
    let mut by_match: HashMap<i64, Vec<Assignment>> = HashMap::new();
    {
        let mut stmt = conn.prepare(
            "SELECT id, match_id, personnel_id, is_working FROM assignments ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], map_assignment)?;
        for r in rows {
            let a = r?;
            by_match.entry(a.match_id).or_default().push(a);
        }
    }

    let mut stmt = conn.prepare(
        "SELECT id, date, time, opponent, match_type, distance_miles, required_guards
         FROM matches
         ORDER BY date ASC, time ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_match)?;

    let mut out = Vec::new();
    for r in rows {
        let mut m = r?;
        m.assignments = by_match.remove(&m.id).unwrap_or_default();
        out.push(m);
    }
    Ok(out)
}

pub fn find_assignment(
    conn: &Connection,
    match_id: i64,
    personnel_id: i64,
) -> AppResult<Option<Assignment>> {
    let mut stmt = conn.prepare(
        "SELECT id, match_id, personnel_id, is_working FROM assignments
         WHERE match_id = ?1 AND personnel_id = ?2",
    )?;
    Ok(stmt
        .query_row(params![match_id, personnel_id], map_assignment)
        .optional()?)
}

pub fn insert_assignment(
    conn: &Connection,
    match_id: i64,
    personnel_id: i64,
    is_working: bool,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO assignments (match_id, personnel_id, is_working) VALUES (?1, ?2, ?3)",
        params![match_id, personnel_id, is_working as i32],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn set_assignment_working(conn: &Connection, id: i64, is_working: bool) -> AppResult<()> {
    conn.execute(
        "UPDATE assignments SET is_working = ?1 WHERE id = ?2",
        params![is_working as i32, id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// work_hours
// ---------------------------------------------------------------------------

fn map_work_hours(row: &Row) -> Result<WorkHourEntry> {
    let work_date: Option<String> = row.get("work_date")?;
    let work_date = match work_date {
        Some(s) if !s.is_empty() => Some(parse_db_date(6, &s)?),
        _ => None,
    };

    Ok(WorkHourEntry {
        id: row.get("id")?,
        match_id: row.get("match_id")?,
        personnel_id: row.get("personnel_id")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        total_hours: row.get("total_hours")?,
        work_date,
        notes: row.get::<_, Option<String>>("notes")?.unwrap_or_default(),
    })
}

/// All entries, most recent work date first.
pub fn load_work_hours(conn: &Connection) -> AppResult<Vec<WorkHourEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, match_id, personnel_id, start_time, end_time, total_hours, work_date, notes
         FROM work_hours
         ORDER BY work_date DESC, id DESC",
    )?;
    let rows = stmt.query_map([], map_work_hours)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_work_hours_id(
    conn: &Connection,
    match_id: i64,
    personnel_id: i64,
) -> AppResult<Option<i64>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM work_hours WHERE match_id = ?1 AND personnel_id = ?2 LIMIT 1",
    )?;
    Ok(stmt
        .query_row(params![match_id, personnel_id], |row| row.get(0))
        .optional()?)
}

pub fn count_work_hours_for_pair(
    conn: &Connection,
    match_id: i64,
    personnel_id: i64,
) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM work_hours WHERE match_id = ?1 AND personnel_id = ?2",
        params![match_id, personnel_id],
        |row| row.get(0),
    )?)
}

pub fn insert_work_hours(conn: &Connection, wh: &NewWorkHours) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_hours (match_id, personnel_id, start_time, end_time, work_date, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            wh.match_id,
            wh.personnel_id,
            wh.start_time,
            wh.end_time,
            fmt_date(&wh.work_date),
            wh.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_work_hours_for_pair(
    conn: &Connection,
    match_id: i64,
    personnel_id: i64,
) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM work_hours WHERE match_id = ?1 AND personnel_id = ?2",
        params![match_id, personnel_id],
    )?)
}

// ---------------------------------------------------------------------------
// security_duties
// ---------------------------------------------------------------------------

fn map_duty(row: &Row) -> Result<SecurityDuty> {
    let date_str: String = row.get("date")?;

    Ok(SecurityDuty {
        id: row.get("id")?,
        date: parse_db_date(1, &date_str)?,
        opponent: row.get("opponent")?,
        personnel_id: row.get("personnel_id")?,
        personnel_name: row.get("personnel_name")?,
        hours: row.get("hours")?,
        mileage_compensation: row
            .get::<_, Option<f64>>("mileage_compensation")?
            .unwrap_or(0.0),
        notes: row.get::<_, Option<String>>("notes")?.unwrap_or_default(),
    })
}

/// All duties, most recent first.
pub fn load_duties(conn: &Connection) -> AppResult<Vec<SecurityDuty>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, opponent, personnel_id, personnel_name, hours, mileage_compensation, notes
         FROM security_duties
         ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map([], map_duty)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_duty(conn: &Connection, d: &DutyInput) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO security_duties
            (date, opponent, personnel_id, personnel_name, hours, mileage_compensation, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            fmt_date(&d.date),
            d.opponent,
            d.personnel_id,
            d.personnel_name,
            d.hours,
            d.mileage_compensation,
            d.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_duty(conn: &Connection, id: i64, d: &DutyInput) -> AppResult<usize> {
    Ok(conn.execute(
        "UPDATE security_duties
         SET date = ?1, opponent = ?2, personnel_id = ?3, personnel_name = ?4,
             hours = ?5, mileage_compensation = ?6, notes = ?7
         WHERE id = ?8",
        params![
            fmt_date(&d.date),
            d.opponent,
            d.personnel_id,
            d.personnel_name,
            d.hours,
            d.mileage_compensation,
            d.notes,
            id,
        ],
    )?)
}

pub fn delete_duty(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM security_duties WHERE id = ?1", [id])?)
}

// ---------------------------------------------------------------------------
// snapshot
// ---------------------------------------------------------------------------

/// Fetch all four collections in one go.
pub fn load_snapshot(conn: &Connection) -> AppResult<Snapshot> {
    Ok(Snapshot {
        personnel: load_personnel(conn)?,
        matches: load_matches(conn)?,
        work_hours: load_work_hours(conn)?,
        security_duties: load_duties(conn)?,
    })
}
