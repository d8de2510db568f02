#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gr() -> Command {
    cargo_bin_cmd!("guardroster")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_guardroster.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize an empty DB (schema only, no config file written)
pub fn init_db(db_path: &str) {
    gr().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run a command against `db_path` and require success
pub fn ok(db_path: &str, args: &[&str]) {
    let mut full = vec!["--db", db_path];
    full.extend_from_slice(args);
    gr().args(&full).assert().success();
}

/// Initialize DB with a small roster and two matches:
///
/// persons: 1 Anna (regular, security), 2 Bertil (regular), 3 Cecilia (extra)
/// matches: 1 home 2025-09-20 19:00 vs IFK Test,
///          2 away 2025-10-04 15:00 vs AIK Borta, 10 mil
pub fn init_db_with_roster(db_path: &str) {
    init_db(db_path);

    ok(db_path, &["person", "add", "Anna", "--role", "R", "--security"]);
    ok(db_path, &["person", "add", "Bertil", "--role", "R"]);
    ok(db_path, &["person", "add", "Cecilia", "--role", "E"]);

    ok(
        db_path,
        &[
            "match",
            "add",
            "--date",
            "2025-09-20",
            "--time",
            "19:00",
            "--opponent",
            "IFK Test",
        ],
    );
    ok(
        db_path,
        &[
            "match",
            "add",
            "--date",
            "2025-10-04",
            "--time",
            "15:00",
            "--opponent",
            "AIK Borta",
            "--type",
            "away",
            "--distance",
            "10",
        ],
    );
}

/// Number of work-hour rows stored for a (match, person) pair
pub fn count_work_hours(db_path: &str, match_id: i64, personnel_id: i64) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    guardroster::db::queries::count_work_hours_for_pair(&conn, match_id, personnel_id)
        .expect("count work hours")
}
