//! Pay and mileage aggregation over a snapshot.
//!
//! Everything here is recomputed from the full snapshot on each call.

use super::duration::is_deviation;
use crate::config::Config;
use crate::models::matches::Match;
use crate::models::person::Person;
use crate::models::security_duty::SecurityDuty;
use crate::models::snapshot::Snapshot;
use crate::models::work_hour::WorkHourEntry;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    /// Currency per hour worked.
    pub hourly: f64,
    /// Currency per distance unit per working guard.
    pub mileage: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            hourly: crate::config::default_hourly_rate(),
            mileage: crate::config::default_mileage_rate(),
        }
    }
}

impl From<&Config> for Rates {
    fn from(cfg: &Config) -> Self {
        Self {
            hourly: cfg.hourly_rate,
            mileage: cfg.mileage_rate,
        }
    }
}

/// Mileage owed for one match: distance × rate × working guards.
/// Home matches and matches without a distance pay nothing.
pub fn match_mileage(m: &Match, rates: Rates) -> f64 {
    match (m.is_away(), m.distance_miles) {
        (true, Some(d)) if d > 0.0 => d * rates.mileage * m.working_count() as f64,
        _ => 0.0,
    }
}

/// Mileage credited to a single guard for one match. Each working guard
/// gets the full distance; the amount is not split between them.
pub fn guard_match_mileage(m: &Match, rates: Rates) -> f64 {
    match (m.is_away(), m.distance_miles) {
        (true, Some(d)) if d > 0.0 => d * rates.mileage,
        _ => 0.0,
    }
}

/// Sum starting from +0.0; `Iterator::sum` on an empty f64 iterator
/// yields -0.0.
fn total(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |acc, v| acc + v)
}

pub fn person_work_hours(snapshot: &Snapshot, personnel_id: i64) -> f64 {
    total(
        snapshot
            .entries_for_person(personnel_id)
            .map(WorkHourEntry::hours),
    )
}

pub fn person_security_hours(snapshot: &Snapshot, person: &Person) -> f64 {
    total(snapshot.duties_for_person(person).map(|d| d.hours))
}

/// Work plus security hours.
pub fn person_total_hours(snapshot: &Snapshot, person: &Person) -> f64 {
    person_work_hours(snapshot, person.id) + person_security_hours(snapshot, person)
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonStats {
    pub name: String,
    pub matches: usize,
    pub work_hours: f64,
    pub security_duties: usize,
    pub security_hours: f64,
    pub hours: f64,
    pub salary: f64,
    pub match_mileage: f64,
    pub security_mileage: f64,
    pub mileage: f64,
    pub total_compensation: f64,
}

pub fn person_stats(snapshot: &Snapshot, person: &Person, rates: Rates) -> PersonStats {
    let entries: Vec<&WorkHourEntry> = snapshot.entries_for_person(person.id).collect();
    let work_hours = total(entries.iter().map(|wh| wh.hours()));

    let match_mileage = total(
        entries
            .iter()
            .filter_map(|wh| snapshot.match_by_id(wh.match_id))
            .map(|m| guard_match_mileage(m, rates)),
    );

    let duties: Vec<_> = snapshot.duties_for_person(person).collect();
    let security_hours = total(duties.iter().map(|d| d.hours));
    let security_mileage = total(duties.iter().map(|d| d.mileage_compensation));

    let hours = work_hours + security_hours;
    let salary = hours * rates.hourly;
    let mileage = match_mileage + security_mileage;

    PersonStats {
        name: person.name.clone(),
        matches: entries.len(),
        work_hours,
        security_duties: duties.len(),
        security_hours,
        hours,
        salary,
        match_mileage,
        security_mileage,
        mileage,
        total_compensation: salary + mileage,
    }
}

/// Stats for everyone, in roster order.
pub fn all_person_stats(snapshot: &Snapshot, rates: Rates) -> Vec<PersonStats> {
    snapshot
        .personnel
        .iter()
        .map(|p| person_stats(snapshot, p, rates))
        .collect()
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SeasonTotals {
    pub matches_worked: usize,
    pub security_duties: usize,
    pub work_hours: f64,
    pub security_hours: f64,
    pub hours: f64,
    pub salary: f64,
    pub match_mileage: f64,
    pub security_mileage: f64,
    pub mileage: f64,
    /// Σ distance × working guards over away matches.
    pub miles_driven: f64,
    pub total_compensation: f64,
}

pub fn total_miles_driven(snapshot: &Snapshot) -> f64 {
    total(
        snapshot
            .matches
            .iter()
            .filter(|m| m.is_away())
            .map(|m| m.distance_miles.unwrap_or(0.0) * m.working_count() as f64),
    )
}

pub fn season_totals(snapshot: &Snapshot, rates: Rates) -> SeasonTotals {
    let work_hours = total(snapshot.work_hours.iter().map(WorkHourEntry::hours));
    let security_hours = total(snapshot.security_duties.iter().map(|d| d.hours));
    let hours = work_hours + security_hours;
    let salary = hours * rates.hourly;

    let match_mileage = total(snapshot.matches.iter().map(|m| match_mileage(m, rates)));
    let security_mileage = total(
        snapshot
            .security_duties
            .iter()
            .map(|d| d.mileage_compensation),
    );
    let mileage = match_mileage + security_mileage;

    SeasonTotals {
        matches_worked: snapshot.work_hours.len(),
        security_duties: snapshot.security_duties.len(),
        work_hours,
        security_hours,
        hours,
        salary,
        match_mileage,
        security_mileage,
        mileage,
        miles_driven: total_miles_driven(snapshot),
        total_compensation: salary + mileage,
    }
}

/// Pay for one security duty: hours × hourly rate plus its mileage.
pub fn duty_compensation(duty: &SecurityDuty, rates: Rates) -> f64 {
    duty.hours * rates.hourly + duty.mileage_compensation
}

/// Totals over a set of security duties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DutySummary {
    pub count: usize,
    pub hours: f64,
    pub salary: f64,
    pub mileage: f64,
    pub total: f64,
}

pub fn duty_summary<'a>(
    duties: impl Iterator<Item = &'a SecurityDuty>,
    rates: Rates,
) -> DutySummary {
    let mut summary = DutySummary::default();
    for d in duties {
        summary.count += 1;
        summary.hours += d.hours;
        summary.mileage += d.mileage_compensation;
    }
    summary.salary = summary.hours * rates.hourly;
    summary.total = summary.salary + summary.mileage;
    summary
}

/// One summary per security-responsible person who has at least one duty,
/// in roster order.
pub fn security_person_summaries(snapshot: &Snapshot, rates: Rates) -> Vec<(String, DutySummary)> {
    snapshot
        .personnel
        .iter()
        .filter(|p| p.security_responsible)
        .map(|p| (p.name.clone(), duty_summary(snapshot.duties_for_person(p), rates)))
        .filter(|(_, s)| s.count > 0)
        .collect()
}

/// Figures printed under the hours table, optionally for one person.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HoursSummary {
    pub work_entries: usize,
    pub work_hours: f64,
    /// Entries of exactly the standard shift length.
    pub standard_shifts: usize,
    pub deviating_shifts: usize,
    pub duties: usize,
    pub security_hours: f64,
    pub average_duty_hours: f64,
    pub total_entries: usize,
    pub total_hours: f64,
}

pub fn hours_summary(snapshot: &Snapshot, person: Option<&Person>) -> HoursSummary {
    let entries: Vec<&WorkHourEntry> = snapshot
        .work_hours
        .iter()
        .filter(|wh| person.is_none_or(|p| wh.personnel_id == p.id))
        .collect();
    let duties: Vec<&SecurityDuty> = snapshot
        .security_duties
        .iter()
        .filter(|d| person.is_none_or(|p| d.belongs_to(p)))
        .collect();

    let work_hours = total(entries.iter().map(|wh| wh.hours()));
    let deviating_shifts = entries.iter().filter(|wh| is_deviation(wh.hours())).count();
    let security_hours = total(duties.iter().map(|d| d.hours));
    let average_duty_hours = if duties.is_empty() {
        0.0
    } else {
        security_hours / duties.len() as f64
    };

    HoursSummary {
        work_entries: entries.len(),
        work_hours,
        standard_shifts: entries.len() - deviating_shifts,
        deviating_shifts,
        duties: duties.len(),
        security_hours,
        average_duty_hours,
        total_entries: entries.len() + duties.len(),
        total_hours: work_hours + security_hours,
    }
}

/// True when the pair has an entry whose duration is not the standard.
pub fn has_deviating_hours(snapshot: &Snapshot, match_id: i64, personnel_id: i64) -> bool {
    snapshot
        .entry_for(match_id, personnel_id)
        .is_some_and(|wh| is_deviation(wh.hours()))
}

/// Per-guard detail shown next to a match cell.
#[derive(Debug, Clone)]
pub struct GuardDetail<'a> {
    pub name: String,
    pub season_hours: f64,
    pub season_matches: usize,
    pub average_hours: f64,
    pub entry: Option<&'a WorkHourEntry>,
}

impl GuardDetail<'_> {
    pub fn render(&self) -> String {
        let mut out = format!(
            "{}\nTotalt denna säsong: {:.1}h ({} matcher)\nSnitt per match: {:.1}h\n",
            self.name, self.season_hours, self.season_matches, self.average_hours
        );

        if let Some(wh) = self.entry {
            out.push_str(&format!(
                "\nDenna match:\n{} - {}\n{}h",
                wh.start_time,
                wh.end_time,
                wh.hours()
            ));
            if is_deviation(wh.hours()) {
                out.push_str(" (avviker från standard 4,5h)");
            }
            if !wh.notes.is_empty() {
                out.push_str(&format!("\nAnteckning: {}", wh.notes));
            }
        }

        out
    }
}

pub fn guard_detail<'a>(snapshot: &'a Snapshot, m: &Match, person: &Person) -> GuardDetail<'a> {
    let season_hours = person_work_hours(snapshot, person.id);
    let season_matches = snapshot.entries_for_person(person.id).count();
    let average_hours = if season_matches > 0 {
        season_hours / season_matches as f64
    } else {
        0.0
    };

    GuardDetail {
        name: person.name.clone(),
        season_hours,
        season_matches,
        average_hours,
        entry: snapshot.entry_for(m.id, person.id),
    }
}
