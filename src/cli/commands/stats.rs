use super::{open_db, separator};
use crate::config::Config;
use crate::core::calculator::compensation::{Rates, all_person_stats, season_totals};
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, fmt_number};
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_hours, fmt_kr};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let snapshot = load_snapshot(&pool.conn)?;
    let rates = Rates::from(cfg);

    header("Per person");
    let mut table = Table::new(vec![
        Column::left("Name"),
        Column::right("Matches"),
        Column::right("Match h"),
        Column::right("Sec. duties"),
        Column::right("Sec. hours"),
        Column::right("Hours"),
        Column::right("Salary"),
        Column::right("Mileage"),
        Column::right("Total"),
    ]);
    for s in all_person_stats(&snapshot, rates) {
        table.add_row(vec![
            s.name,
            s.matches.to_string(),
            fmt_hours(s.work_hours),
            s.security_duties.to_string(),
            fmt_hours(s.security_hours),
            fmt_hours(s.hours),
            fmt_kr(s.salary),
            fmt_kr(s.mileage),
            fmt_kr(s.total_compensation),
        ]);
    }
    print!("{}", table.render(separator(cfg)));

    let t = season_totals(&snapshot, rates);
    header("Season");
    println!("Matches worked   : {}", t.matches_worked);
    println!("Security duties  : {}", t.security_duties);
    println!(
        "Hours            : {} (match {}, security {})",
        fmt_hours(t.hours),
        fmt_hours(t.work_hours),
        fmt_hours(t.security_hours)
    );
    println!(
        "Salary           : {} ({} kr/h)",
        fmt_kr(t.salary),
        fmt_number(rates.hourly)
    );
    println!(
        "Mileage          : {} (match {}, security {})",
        fmt_kr(t.mileage),
        fmt_kr(t.match_mileage),
        fmt_kr(t.security_mileage)
    );
    println!("Miles driven     : {} mil", fmt_number(t.miles_driven));
    println!(
        "Total            : {}",
        bold(&fmt_kr(t.total_compensation))
    );

    Ok(())
}
