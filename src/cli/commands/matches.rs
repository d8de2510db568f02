use super::{open_db, separator};
use crate::cli::parser::{Commands, MatchAction};
use crate::config::Config;
use crate::core::assign::AssignmentState;
use crate::core::calculator::compensation::{
    Rates, guard_detail, has_deviating_hours, match_mileage,
};
use crate::core::calculator::months::{MonthKey, MonthView, group_by_month};
use crate::core::matches::{MatchForm, MatchLogic};
use crate::db::queries::load_snapshot;
use crate::errors::{AppError, AppResult};
use crate::models::matches::{Match, MatchType};
use crate::models::snapshot::Snapshot;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{GREY, RESET, YELLOW, color_for_staffing};
use crate::utils::fmt_kr;
use crate::utils::formatting::{bold, fmt_number};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Match { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_db(cfg)?;

    match action {
        MatchAction::Add {
            date,
            time,
            opponent,
            match_type,
            distance,
            guards,
        } => {
            let match_type = MatchType::from_code(match_type)
                .ok_or_else(|| AppError::InvalidMatchType(match_type.clone()))?;

            let form = MatchForm {
                date: date.clone(),
                time: time.clone().unwrap_or_else(|| cfg.default_kickoff.clone()),
                opponent: opponent.clone(),
                match_type,
                distance_miles: *distance,
                required_guards: guards.unwrap_or(cfg.default_required_guards),
            };

            let id = MatchLogic::add(&mut pool, &form)?;
            success(format!(
                "Added match {} vs {} on {} with id {}",
                match_type.label(),
                form.opponent.trim(),
                form.date,
                id
            ));
        }

        MatchAction::List { filter, collapse } => {
            let snapshot = load_snapshot(&pool.conn)?;
            let rates = Rates::from(cfg);
            let groups = group_by_month(&snapshot.matches, *filter);

            if groups.is_empty() {
                info("No matches found.");
                return Ok(());
            }

            let mut view = MonthView::all_expanded(&groups);
            for c in collapse {
                match MonthKey::parse(c) {
                    Some(key) if view.is_expanded(&key) => {
                        view.toggle(key);
                    }
                    Some(_) => {}
                    None => warning(format!("Ignoring invalid month '{}'", c)),
                }
            }

            for g in &groups {
                let marker = if view.is_expanded(&g.key) { "▼" } else { "▶" };
                header(format!("{} {} ({} matcher)", marker, g.name, g.matches.len()));
                if !view.is_expanded(&g.key) {
                    continue;
                }

                let mut table = Table::new(vec![
                    Column::right("ID"),
                    Column::left("Date"),
                    Column::left("Time"),
                    Column::left("Opponent"),
                    Column::left("Type"),
                    Column::right("Staff"),
                    Column::right("Mileage"),
                    Column::left("Guards"),
                ]);
                for m in &g.matches {
                    table.add_row(match_row(&snapshot, m, rates));
                }
                print!("{}", table.render(separator(cfg)));
            }
        }

        MatchAction::Show { match_id } => {
            let snapshot = load_snapshot(&pool.conn)?;
            let m = snapshot
                .match_by_id(*match_id)
                .ok_or(AppError::MatchNotFound(*match_id))?;
            show_match(&snapshot, m, Rates::from(cfg));
        }
    }

    Ok(())
}

fn staffing_badge(m: &Match) -> String {
    format!(
        "{}{}/{}{}",
        color_for_staffing(m.is_fully_staffed()),
        m.working_count(),
        m.required_guards,
        RESET
    )
}

fn match_row(snapshot: &Snapshot, m: &Match, rates: Rates) -> Vec<String> {
    let guards: Vec<String> = snapshot
        .personnel
        .iter()
        .filter(|p| m.is_working(p.id))
        .map(|p| {
            if has_deviating_hours(snapshot, m.id, p.id) {
                format!("{}{}*{}", YELLOW, p.name, RESET)
            } else {
                p.name.clone()
            }
        })
        .collect();

    let type_label = match m.distance_miles {
        Some(d) if m.is_away() => format!("{} ({} mil)", m.match_type.label(), fmt_number(d)),
        _ => m.match_type.label().to_string(),
    };

    let mileage = match_mileage(m, rates);

    vec![
        m.id.to_string(),
        m.date_str(),
        m.time.clone(),
        m.opponent.clone(),
        type_label,
        staffing_badge(m),
        if mileage > 0.0 {
            fmt_kr(mileage)
        } else {
            "-".to_string()
        },
        guards.join(", "),
    ]
}

fn show_match(snapshot: &Snapshot, m: &Match, rates: Rates) {
    println!(
        "{} {} {} vs {} ({})",
        bold(&format!("#{}", m.id)),
        m.date_str(),
        m.time,
        m.opponent,
        m.match_type.label()
    );
    println!("Staffing: {}", staffing_badge(m));
    if m.is_away() {
        println!(
            "Distance: {} mil, mileage {}",
            fmt_number(m.distance_miles.unwrap_or(0.0)),
            fmt_kr(match_mileage(m, rates))
        );
    }

    for (title, people) in [
        ("Ordinarie", snapshot.regulars().collect::<Vec<_>>()),
        ("Extra", snapshot.extras().collect::<Vec<_>>()),
    ] {
        if people.is_empty() {
            continue;
        }
        header(title);
        for p in people {
            match AssignmentState::of(m.assignment_for(p.id)) {
                AssignmentState::Working => {
                    println!("{}", guard_detail(snapshot, m, p).render());
                    println!();
                }
                AssignmentState::NotWorking => {
                    println!("{}{} (not working){}", GREY, p.name, RESET);
                }
                AssignmentState::Unassigned => {
                    println!("{}{} (unassigned){}", GREY, p.name, RESET);
                }
            }
        }
    }
}
