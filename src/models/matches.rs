use super::assignment::Assignment;
use chrono::NaiveDate;
use serde::Serialize;

/// Kickoff placeholder used when the time is not yet announced.
pub const KICKOFF_TBA: &str = "TBA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchType {
    Home,
    Away,
}

impl MatchType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            MatchType::Home => "home",
            MatchType::Away => "away",
        }
    }

    /// Unknown or empty values are read as home, like rows created before
    /// the column existed.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "away" => MatchType::Away,
            _ => MatchType::Home,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "home" | "h" => Some(MatchType::Home),
            "away" | "a" => Some(MatchType::Away),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchType::Home => "Hemma",
            MatchType::Away => "Borta",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub id: i64,
    pub date: NaiveDate,             // ⇔ matches.date (TEXT "YYYY-MM-DD")
    pub time: String,                // ⇔ matches.time ("HH:MM" or "TBA")
    pub opponent: String,            // ⇔ matches.opponent
    pub match_type: MatchType,       // ⇔ matches.match_type ('home' | 'away')
    pub distance_miles: Option<f64>, // ⇔ matches.distance_miles (NULL for home)
    pub required_guards: u32,        // ⇔ matches.required_guards (default 4)
    pub assignments: Vec<Assignment>,
}

impl Match {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Kickoff time, `None` when unknown.
    pub fn kickoff(&self) -> Option<&str> {
        let t = self.time.trim();
        if t.is_empty() || t.eq_ignore_ascii_case(KICKOFF_TBA) {
            None
        } else {
            Some(t)
        }
    }

    pub fn is_away(&self) -> bool {
        self.match_type == MatchType::Away
    }

    pub fn assignment_for(&self, personnel_id: i64) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.personnel_id == personnel_id)
    }

    pub fn is_working(&self, personnel_id: i64) -> bool {
        self.assignment_for(personnel_id)
            .map(|a| a.is_working)
            .unwrap_or(false)
    }

    pub fn working_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_working).count()
    }

    pub fn is_fully_staffed(&self) -> bool {
        self.working_count() >= self.required_guards as usize
    }
}
