use super::{open_db, resolve_person};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::is_deviation;
use crate::core::calculator::worktime::derive_work_times;
use crate::core::time_entry::TimeEntryLogic;
use crate::db::queries::load_snapshot;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Time {
        match_id,
        person,
        start,
        end,
        notes,
    } = cmd
    {
        let mut start = parse_optional_time(start.as_ref())?;
        let mut end = parse_optional_time(end.as_ref())?;

        let mut pool = open_db(cfg)?;
        let snapshot = load_snapshot(&pool.conn)?;
        let p = resolve_person(&snapshot, person)?;

        // no times given: keep the current window, or derive it from kickoff
        if start.is_none() && end.is_none() {
            let m = snapshot
                .match_by_id(*match_id)
                .ok_or(AppError::MatchNotFound(*match_id))?;
            let (s, e) = match snapshot.entry_for(m.id, p.id) {
                Some(wh) => (wh.start_time.clone(), wh.end_time.clone()),
                None => {
                    let w = derive_work_times(m.kickoff());
                    (w.start, w.end)
                }
            };
            start = Some(s);
            end = Some(e);
        }

        let saved = TimeEntryLogic::save(
            &mut pool,
            *match_id,
            p.id,
            start.as_deref(),
            end.as_deref(),
            notes,
        )?;

        success(format!(
            "{}: {} - {} ({}h)",
            saved.person, saved.start, saved.end, saved.hours
        ));
        if is_deviation(saved.hours) {
            warning("Deviates from the 4.5h standard shift.");
        }
    }
    Ok(())
}
