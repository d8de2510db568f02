//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid match type: {0}")]
    InvalidMatchType(String),

    // ---------------------------
    // Validation (rejected before any write)
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Match not found: {0}")]
    MatchNotFound(i64),

    #[error("Security duty not found: {0}")]
    DutyNotFound(i64),

    #[error("Person already exists: {0}")]
    DuplicatePerson(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(format!("JSON serialization error: {e}"))
    }
}
