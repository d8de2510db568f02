use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{NewMatch, insert_match};
use crate::errors::{AppError, AppResult};
use crate::models::matches::MatchType;
use crate::utils::date::parse_date;
use crate::utils::time::normalize_kickoff;

/// Raw form input for a new match.
#[derive(Debug, Clone)]
pub struct MatchForm {
    pub date: String,
    pub time: String,
    pub opponent: String,
    pub match_type: MatchType,
    pub distance_miles: Option<f64>,
    pub required_guards: u32,
}

impl MatchForm {
    /// Field checks done before any write.
    pub fn validate(&self) -> AppResult<NewMatch> {
        let opponent = self.opponent.trim();
        if self.date.trim().is_empty() || self.time.trim().is_empty() || opponent.is_empty() {
            return Err(AppError::Validation(
                "Date, time and opponent are required.".into(),
            ));
        }

        let date = parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;
        let time = normalize_kickoff(&self.time)?;

        let distance_miles = match self.match_type {
            MatchType::Away => match self.distance_miles {
                Some(d) if d.is_finite() && d > 0.0 => Some(d),
                _ => {
                    return Err(AppError::Validation(
                        "Away matches need a distance greater than 0.".into(),
                    ));
                }
            },
            MatchType::Home => None,
        };

        if self.required_guards == 0 {
            return Err(AppError::Validation(
                "Required guards must be at least 1.".into(),
            ));
        }

        Ok(NewMatch {
            date,
            time,
            opponent: opponent.to_string(),
            match_type: self.match_type,
            distance_miles,
            required_guards: self.required_guards,
        })
    }
}

pub struct MatchLogic;

impl MatchLogic {
    pub fn add(pool: &mut DbPool, form: &MatchForm) -> AppResult<i64> {
        let m = form.validate()?;
        let id = insert_match(&pool.conn, &m)?;

        audit(
            &pool.conn,
            "add",
            &format!("match {}", id),
            &format!(
                "{} {} {} ({})",
                m.date,
                m.time,
                m.opponent,
                m.match_type.to_db_str()
            ),
        );
        Ok(id)
    }
}
