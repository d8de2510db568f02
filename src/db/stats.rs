use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

const TABLES: &[&str] = &[
    "personnel",
    "matches",
    "assignments",
    "work_hours",
    "security_duties",
];

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for table in TABLES {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                    row.get(0)
                })?;
        println!("    {:<16} {}{}{}", table, GREEN, count, RESET);
    }

    //
    // 3) SEASON RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM matches", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    let last_date: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM matches", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Matches:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
