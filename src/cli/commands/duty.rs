use super::{open_db, resolve_person, separator};
use crate::cli::parser::{Commands, DutyAction};
use crate::config::Config;
use crate::core::calculator::compensation::{
    Rates, duty_compensation, duty_summary, security_person_summaries,
};
use crate::core::duty::{DutyForm, DutyLogic};
use crate::db::queries::load_snapshot;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::formatting::{bold, fmt_number};
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_hours, fmt_kr};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Duty { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_db(cfg)?;
    let snapshot = load_snapshot(&pool.conn)?;

    match action {
        DutyAction::Add {
            date,
            opponent,
            person,
            hours,
            mileage,
            notes,
        } => {
            let p = resolve_person(&snapshot, person)?;
            let form = DutyForm {
                date: date.clone(),
                opponent: opponent.clone(),
                hours: *hours,
                mileage_compensation: *mileage,
                notes: notes.clone(),
            };
            let duty = form.validate(Some(p))?;
            let id = DutyLogic::add(&mut pool, &duty)?;
            success(format!(
                "Security duty {} registered for {} ({}h)",
                id,
                duty.personnel_name,
                fmt_number(duty.hours)
            ));
        }

        DutyAction::Edit {
            id,
            date,
            opponent,
            person,
            hours,
            mileage,
            notes,
        } => {
            let current = snapshot
                .security_duties
                .iter()
                .find(|d| d.id == *id)
                .ok_or(AppError::DutyNotFound(*id))?;

            let p = match person {
                Some(key) => resolve_person(&snapshot, key)?,
                None => snapshot
                    .personnel
                    .iter()
                    .find(|p| current.belongs_to(p))
                    .ok_or_else(|| {
                        AppError::Validation(format!(
                            "The owner of security duty {} is no longer on the roster; pass --person.",
                            id
                        ))
                    })?,
            };

            let form = DutyForm {
                date: date
                    .clone()
                    .unwrap_or_else(|| current.date.format("%Y-%m-%d").to_string()),
                opponent: opponent.clone().unwrap_or_else(|| current.opponent.clone()),
                hours: hours.or(Some(current.hours)),
                mileage_compensation: mileage.or(Some(current.mileage_compensation)),
                notes: notes.clone().unwrap_or_else(|| current.notes.clone()),
            };
            let duty = form.validate(Some(p))?;
            DutyLogic::edit(&mut pool, *id, &duty)?;
            success(format!("Security duty {} updated", id));
        }

        DutyAction::Del { id } => {
            DutyLogic::delete(&mut pool, *id)?;
            success(format!("Security duty {} deleted", id));
        }

        DutyAction::List => {
            if snapshot.security_duties.is_empty() {
                info("No security duties registered.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Date"),
                Column::left("Match/assignment"),
                Column::left("Person"),
                Column::right("Hours"),
                Column::right("Mileage"),
                Column::right("Total"),
                Column::left("Notes"),
            ]);
            let rates = Rates::from(cfg);
            for d in &snapshot.security_duties {
                table.add_row(vec![
                    d.id.to_string(),
                    d.date.format("%Y-%m-%d").to_string(),
                    d.opponent.clone(),
                    d.personnel_name.clone(),
                    fmt_hours(d.hours),
                    fmt_kr(d.mileage_compensation),
                    fmt_kr(duty_compensation(d, rates)),
                    d.notes.clone(),
                ]);
            }
            print!("{}", table.render(separator(cfg)));

            let s = duty_summary(snapshot.security_duties.iter(), rates);
            header("Summary");
            println!("Duties           : {}", s.count);
            println!("Hours            : {}", fmt_hours(s.hours));
            println!(
                "Salary           : {} ({} kr/h)",
                fmt_kr(s.salary),
                fmt_number(rates.hourly)
            );
            println!("Mileage          : {}", fmt_kr(s.mileage));
            println!("Total            : {}", bold(&fmt_kr(s.total)));

            let per_person = security_person_summaries(&snapshot, rates);
            if !per_person.is_empty() {
                header("Per security responsible");
                for (name, s) in per_person {
                    println!(
                        "{}: {} duties, {}, {}",
                        name,
                        s.count,
                        fmt_hours(s.hours),
                        fmt_kr(s.total)
                    );
                }
            }
        }
    }

    Ok(())
}
