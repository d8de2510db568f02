//! Default work window derived from a match kickoff.
//!
//! Guards report two hours before kickoff and stay until two and a half
//! hours after it. Both ends are snapped to the nearest quarter hour.

/// Window used when the kickoff is unknown or unreadable.
pub const DEFAULT_START: &str = "17:00";
pub const DEFAULT_END: &str = "21:30";

/// Length of the standard shift, in hours.
pub const STANDARD_SHIFT_HOURS: f64 = 4.5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkTimes {
    pub start: String,
    pub end: String,
}

impl Default for WorkTimes {
    fn default() -> Self {
        Self {
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
        }
    }
}

/// Nearest multiple of 15; an exact half rounds up.
fn round_quarter(minutes: i64) -> i64 {
    (2 * minutes + 15).div_euclid(30) * 15
}

/// First two `:`-separated fields of "HH:MM" or "HH:MM:SS", widened so the
/// arithmetic below cannot overflow.
fn parse_kickoff(kickoff: &str) -> Option<(i64, i64)> {
    let mut parts = kickoff.trim().split(':');
    let hours = parts.next()?.trim().parse::<i32>().ok()?;
    let minutes = parts.next()?.trim().parse::<i32>().ok()?;
    Some((i64::from(hours), i64::from(minutes)))
}

/// Zero-padded "HH:MM". Hours are not wrapped modulo 24.
fn fmt_hm(hours: i64, minutes: i64) -> String {
    format!("{:02}:{:02}", hours, minutes)
}

/// Derive the default {start, end} window for a kickoff "HH:MM".
///
/// `None`, an empty string or `TBA` give the fixed 17:00–21:30 window, as
/// does anything that does not parse. This function never fails.
pub fn derive_work_times(kickoff: Option<&str>) -> WorkTimes {
    let kickoff = match kickoff.map(str::trim) {
        Some(k) if !k.is_empty() && !k.eq_ignore_ascii_case("TBA") => k,
        _ => return WorkTimes::default(),
    };

    let Some((hours, minutes)) = parse_kickoff(kickoff) else {
        return WorkTimes::default();
    };

    let mut start_hour = hours - 2;
    let mut start_minutes = round_quarter(minutes);
    if start_minutes >= 60 {
        start_hour += 1;
        start_minutes = 0;
    }

    let mut end_hour = hours + 2;
    let mut end_minutes = round_quarter(minutes + 30);
    if end_minutes >= 60 {
        end_hour += 1;
        end_minutes -= 60;
    }

    WorkTimes {
        start: fmt_hm(start_hour, start_minutes),
        end: fmt_hm(end_hour, end_minutes),
    }
}
