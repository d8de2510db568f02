pub mod config;
pub mod db;
pub mod duty;
pub mod export;
pub mod hours;
pub mod init;
pub mod log;
pub mod matches;
pub mod person;
pub mod stats;
pub mod time;
pub mod toggle;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::person::Person;
use crate::models::snapshot::Snapshot;

/// Open the configured database and bring its schema up to date.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Resolve a person reference typed on the command line.
pub(crate) fn resolve_person<'a>(snapshot: &'a Snapshot, key: &str) -> AppResult<&'a Person> {
    snapshot
        .find_person(key)
        .ok_or_else(|| AppError::PersonNotFound(key.to_string()))
}

/// Separator line width used by table output.
pub(crate) fn separator(cfg: &Config) -> &str {
    if cfg.separator_char.is_empty() {
        "-"
    } else {
        cfg.separator_char.as_str()
    }
}
