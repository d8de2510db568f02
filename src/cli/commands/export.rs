use super::{open_db, resolve_person};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        person,
        file,
        force,
    } = cmd
    {
        let pool = open_db(cfg)?;
        let snapshot = load_snapshot(&pool.conn)?;
        let person = person
            .as_deref()
            .map(|key| resolve_person(&snapshot, key))
            .transpose()?;

        ExportLogic::export(&snapshot, person, *format, file.as_deref(), *force)?;
    }
    Ok(())
}
