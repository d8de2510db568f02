use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use rusqlite::{Connection, OptionalExtension, Result};

/// Minutes since midnight of an "HH:MM" column, evaluated by SQLite.
macro_rules! hm_minutes {
    ($col:literal) => {
        concat!(
            "(CAST(substr(",
            $col,
            ", 1, instr(",
            $col,
            ", ':') - 1) AS INTEGER) * 60 + CAST(substr(",
            $col,
            ", instr(",
            $col,
            ", ':') + 1) AS INTEGER))"
        )
    };
}

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if `table` has a column named `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// personnel, matches, assignments and work_hours.
/// `work_hours.total_hours` is computed by the store from start/end.
fn create_core_tables(conn: &Connection) -> Result<()> {
    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS personnel (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            name                 TEXT NOT NULL UNIQUE,
            role                 TEXT NOT NULL DEFAULT 'E' CHECK(role IN ('R','E')),
            security_responsible INTEGER NOT NULL DEFAULT 0,
            created_at           TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS matches (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            date            TEXT NOT NULL,
            time            TEXT NOT NULL DEFAULT 'TBA',
            opponent        TEXT NOT NULL,
            match_type      TEXT NOT NULL DEFAULT 'home' CHECK(match_type IN ('home','away')),
            distance_miles  REAL,
            required_guards INTEGER NOT NULL DEFAULT 4,
            created_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS assignments (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            match_id     INTEGER NOT NULL REFERENCES matches(id),
            personnel_id INTEGER NOT NULL REFERENCES personnel(id),
            is_working   INTEGER NOT NULL DEFAULT 0,
            UNIQUE(match_id, personnel_id)
        );

        CREATE TABLE IF NOT EXISTS work_hours (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            match_id     INTEGER NOT NULL REFERENCES matches(id),
            personnel_id INTEGER NOT NULL REFERENCES personnel(id),
            start_time   TEXT NOT NULL,
            end_time     TEXT NOT NULL,
            total_hours  REAL GENERATED ALWAYS AS (
                ROUND(({end} - {start}) / 60.0, 2)
            ) VIRTUAL,
            work_date    TEXT,
            notes        TEXT NOT NULL DEFAULT '',
            created_at   TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_matches_date ON matches(date);
        CREATE INDEX IF NOT EXISTS idx_work_hours_pair ON work_hours(match_id, personnel_id);
        CREATE INDEX IF NOT EXISTS idx_work_hours_date ON work_hours(work_date);
        "#,
        end = hm_minutes!("end_time"),
        start = hm_minutes!("start_time"),
    );

    conn.execute_batch(&sql)
}

fn create_security_duties_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS security_duties (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            date                 TEXT NOT NULL,
            opponent             TEXT NOT NULL,
            personnel_name       TEXT NOT NULL,
            hours                REAL NOT NULL,
            mileage_compensation REAL NOT NULL DEFAULT 0,
            notes                TEXT NOT NULL DEFAULT '',
            created_at           TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_security_duties_date ON security_duties(date);
        "#,
    )
}

/// Link security duties to personnel by id. Existing rows are backfilled
/// by exact name; rows whose name matches nobody keep a NULL key and are
/// still attributed by name.
fn add_personnel_fk_to_duties(conn: &Connection) -> Result<()> {
    if !has_column(conn, "security_duties", "personnel_id")? {
        conn.execute_batch(
            r#"
            ALTER TABLE security_duties
                ADD COLUMN personnel_id INTEGER REFERENCES personnel(id) ON DELETE SET NULL;
            "#,
        )?;
    }

    let linked = conn.execute(
        r#"
        UPDATE security_duties
        SET personnel_id = (
            SELECT p.id FROM personnel p WHERE p.name = security_duties.personnel_name
        )
        WHERE personnel_id IS NULL
        "#,
        [],
    )?;

    if linked > 0 {
        info(format!("Linked {} security duties to personnel ids.", linked));
    }
    Ok(())
}

type Step = fn(&Connection) -> Result<()>;

/// Ordered list of schema versions. Never reorder or rename an entry:
/// the version string is what marks it as applied.
const MIGRATIONS: &[(&str, &str, Step)] = &[
    (
        "20250901_0001_create_core_tables",
        "Created personnel, matches, assignments and work_hours tables",
        create_core_tables,
    ),
    (
        "20250915_0002_add_security_duties",
        "Created security_duties table",
        create_security_duties_table,
    ),
    (
        "20251001_0003_security_duty_personnel_fk",
        "Added personnel_id to security_duties",
        add_personnel_fk_to_duties,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, message, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn).map_err(|e| AppError::Migration(format!("{}: {}", version, e)))?;
        mark_applied(conn, version, message)?;

        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}

/// Versions not yet recorded as applied.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut pending = Vec::new();
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            pending.push(*version);
        }
    }
    Ok(pending)
}
