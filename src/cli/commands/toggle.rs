use super::{open_db, resolve_person};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assign::{AssignLogic, AssignmentState};
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { match_id, person } = cmd {
        let mut pool = open_db(cfg)?;
        let snapshot = load_snapshot(&pool.conn)?;
        let p = resolve_person(&snapshot, person)?;

        let t = AssignLogic::toggle(&mut pool, *match_id, p.id)?;

        match t.to {
            AssignmentState::Working => {
                success(format!("{} is working vs {}", t.person, t.opponent));
                if t.hours_created {
                    info("Default work window registered.");
                }
            }
            _ => {
                success(format!("{} is not working vs {}", t.person, t.opponent));
                if t.hours_removed > 0 {
                    info(format!("Work hours removed ({} entries).", t.hours_removed));
                }
            }
        }
    }
    Ok(())
}
