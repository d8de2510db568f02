use super::{open_db, resolve_person, separator};
use crate::cli::parser::{Commands, PersonAction};
use crate::config::Config;
use crate::core::calculator::compensation::person_total_hours;
use crate::core::person::PersonLogic;
use crate::db::queries::load_snapshot;
use crate::errors::{AppError, AppResult};
use crate::models::person::Role;
use crate::ui::messages::{info, success};
use crate::utils::fmt_hours;
use crate::utils::table::{Column, Table};

fn parse_role(s: &str) -> AppResult<Role> {
    Role::from_code(s).ok_or_else(|| AppError::InvalidRole(s.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Person { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_db(cfg)?;

    match action {
        PersonAction::Add {
            name,
            role,
            security,
        } => {
            let role = parse_role(role)?;
            let id = PersonLogic::add(&mut pool, name, role, *security)?;
            success(format!("Added {} ({}) with id {}", name.trim(), role.label(), id));
        }

        PersonAction::List => {
            let snapshot = load_snapshot(&pool.conn)?;
            if snapshot.personnel.is_empty() {
                info("No personnel registered.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Name"),
                Column::left("Role"),
                Column::left("Security"),
                Column::right("Hours"),
            ]);
            for p in &snapshot.personnel {
                table.add_row(vec![
                    p.id.to_string(),
                    p.name.clone(),
                    p.role.label().to_string(),
                    if p.security_responsible { "yes" } else { "-" }.to_string(),
                    fmt_hours(person_total_hours(&snapshot, p)),
                ]);
            }
            print!("{}", table.render(separator(cfg)));
        }

        PersonAction::Edit {
            person,
            role,
            security,
        } => {
            let snapshot = load_snapshot(&pool.conn)?;
            let p = resolve_person(&snapshot, person)?;
            let role = role.as_deref().map(parse_role).transpose()?;

            PersonLogic::edit(&mut pool, p, role, *security)?;
            success(format!("Updated {}", p.name));
        }

        PersonAction::Del { person } => {
            let snapshot = load_snapshot(&pool.conn)?;
            let p = resolve_person(&snapshot, person)?;
            PersonLogic::delete(&mut pool, p)?;
            success(format!(
                "Deleted {} with all assignments and work hours",
                p.name
            ));
        }
    }

    Ok(())
}
