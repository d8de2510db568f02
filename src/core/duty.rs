use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_duty, insert_duty, update_duty};
use crate::errors::{AppError, AppResult};
use crate::models::person::Person;
use crate::models::security_duty::DutyInput;
use crate::utils::date::parse_date;

/// Raw form input for a security duty.
#[derive(Debug, Clone)]
pub struct DutyForm {
    pub date: String,
    pub opponent: String,
    pub hours: Option<f64>,
    pub mileage_compensation: Option<f64>,
    pub notes: String,
}

impl DutyForm {
    /// Field checks done before any write. `person` must already be
    /// resolved; only security-responsible personnel may take a duty.
    pub fn validate(&self, person: Option<&Person>) -> AppResult<DutyInput> {
        let opponent = self.opponent.trim();
        let (Some(person), Some(hours)) = (person, self.hours) else {
            return Err(AppError::Validation(
                "Date, match, person and hours are required.".into(),
            ));
        };
        if self.date.trim().is_empty() || opponent.is_empty() {
            return Err(AppError::Validation(
                "Date, match, person and hours are required.".into(),
            ));
        }

        if !hours.is_finite() || hours <= 0.0 {
            return Err(AppError::Validation(
                "Hours must be greater than 0.".into(),
            ));
        }

        let mileage_compensation = self.mileage_compensation.unwrap_or(0.0);
        if !mileage_compensation.is_finite() || mileage_compensation < 0.0 {
            return Err(AppError::Validation(
                "Mileage must be a number of 0 or more.".into(),
            ));
        }

        if !person.security_responsible {
            return Err(AppError::Validation(format!(
                "{} is not security responsible.",
                person.name
            )));
        }

        let date = parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;

        Ok(DutyInput {
            date,
            opponent: opponent.to_string(),
            personnel_id: person.id,
            personnel_name: person.name.clone(),
            hours,
            mileage_compensation,
            notes: self.notes.trim().to_string(),
        })
    }
}

pub struct DutyLogic;

impl DutyLogic {
    pub fn add(pool: &mut DbPool, duty: &DutyInput) -> AppResult<i64> {
        let id = insert_duty(&pool.conn, duty)?;
        audit(
            &pool.conn,
            "add",
            &format!("duty {}", id),
            &format!("{} {} {}h", duty.personnel_name, duty.opponent, duty.hours),
        );
        Ok(id)
    }

    pub fn edit(pool: &mut DbPool, id: i64, duty: &DutyInput) -> AppResult<()> {
        if update_duty(&pool.conn, id, duty)? == 0 {
            return Err(AppError::DutyNotFound(id));
        }
        audit(
            &pool.conn,
            "edit",
            &format!("duty {}", id),
            &format!("{} {} {}h", duty.personnel_name, duty.opponent, duty.hours),
        );
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        if delete_duty(&pool.conn, id)? == 0 {
            return Err(AppError::DutyNotFound(id));
        }
        audit(&pool.conn, "del", &format!("duty {}", id), "Security duty deleted");
        Ok(())
    }
}
