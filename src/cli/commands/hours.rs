use super::{open_db, resolve_person, separator};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compensation::hours_summary;
use crate::core::calculator::duration::is_deviation;
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;
use crate::export::{EntryKind, build_rows};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_hours};
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_hours, fmt_kr};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { person } = cmd {
        let pool = open_db(cfg)?;
        let snapshot = load_snapshot(&pool.conn)?;
        let person = person
            .as_deref()
            .map(|key| resolve_person(&snapshot, key))
            .transpose()?;

        let rows = build_rows(&snapshot, person);
        if rows.is_empty() {
            info("No work hours registered.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Type"),
            Column::left("Date"),
            Column::left("Match/assignment"),
            Column::left("Person"),
            Column::left("Time"),
            Column::right("Hours"),
            Column::right("Mileage"),
            Column::left("Notes"),
        ]);

        for r in &rows {
            let deviating = r.kind == EntryKind::Work && is_deviation(r.hours);
            let hours = format!(
                "{}{}{}{}",
                color_for_hours(deviating),
                fmt_hours(r.hours),
                if deviating { " *" } else { "" },
                RESET
            );
            let time = match r.kind {
                EntryKind::Work => format!("{} - {}", r.start_time, r.end_time),
                EntryKind::Security => "-".to_string(),
            };

            table.add_row(vec![
                r.kind.label().to_string(),
                r.date_str(),
                r.opponent.clone(),
                r.personnel.clone(),
                time,
                hours,
                r.mileage.map(fmt_kr).unwrap_or_default(),
                r.notes.clone(),
            ]);
        }

        print!("{}", table.render(separator(cfg)));

        let s = hours_summary(&snapshot, person);
        header("Summary");
        println!(
            "Work             : {} entries, {} ({} standard 4.5h, {} deviating)",
            s.work_entries,
            fmt_hours(s.work_hours),
            s.standard_shifts,
            s.deviating_shifts
        );
        println!(
            "Security         : {} duties, {} (avg {} per duty)",
            s.duties,
            fmt_hours(s.security_hours),
            fmt_hours(s.average_duty_hours)
        );
        println!(
            "Total            : {} entries, {}",
            s.total_entries,
            fmt_hours(s.total_hours)
        );
    }
    Ok(())
}
