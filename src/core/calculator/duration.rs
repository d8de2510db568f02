//! Elapsed hours between two "HH:MM" times on the same day.

use super::worktime::STANDARD_SHIFT_HOURS;
use chrono::NaiveTime;

fn parse_hm(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Hours from `start` to `end`, rounded to one decimal.
///
/// An end at or before the start yields 0 (no wrap to the next day);
/// so does an unreadable time.
pub fn duration_hours(start: &str, end: &str) -> f64 {
    let (Some(s), Some(e)) = (parse_hm(start), parse_hm(end)) else {
        return 0.0;
    };

    if e <= s {
        return 0.0;
    }

    let hours = (e - s).num_minutes() as f64 / 60.0;
    (hours * 10.0).round() / 10.0
}

/// Any duration other than the 4.5 h standard is a deviation.
pub fn is_deviation(hours: f64) -> bool {
    (hours - STANDARD_SHIFT_HOURS).abs() >= 1e-9
}
