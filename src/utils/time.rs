//! Time utilities: parsing and validating HH:MM input.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

fn hm_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,2}:\d{2}$").expect("static regex"))
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Normalise a user-typed "H:MM"/"HH:MM" into zero-padded "HH:MM".
pub fn normalize_time(t: &str) -> AppResult<String> {
    let t = t.trim();
    if !hm_regex().is_match(t) {
        return Err(AppError::InvalidTime(t.to_string()));
    }
    let parsed = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(parsed.format("%H:%M").to_string())
}

/// Kickoff as typed for a new match: "HH:MM" or `TBA`.
pub fn normalize_kickoff(t: &str) -> AppResult<String> {
    if t.trim().eq_ignore_ascii_case(crate::models::matches::KICKOFF_TBA) {
        return Ok(crate::models::matches::KICKOFF_TBA.to_string());
    }
    normalize_time(t)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| normalize_time(s)).transpose()
}
