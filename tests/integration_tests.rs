use predicates::str::contains;

mod common;
use common::{gr, init_db, init_db_with_roster, ok, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    gr().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .expect("count migrations");
    assert_eq!(applied, 3);

    // a second init applies nothing new
    init_db(&db_path);
    let again: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .expect("count migrations");
    assert_eq!(again, 3);
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_roster(&db_path);

    gr().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("personnel"))
        .stdout(contains("security_duties"))
        .stdout(contains("Integrity check passed"));

    gr().args(["--db", &db_path, "db", "--migrate", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("0 applied"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_log_print_shows_mutations() {
    let db_path = setup_test_db("log_print");
    init_db_with_roster(&db_path);
    ok(&db_path, &["toggle", "1", "Anna"]);

    gr().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("person 1"))
        .stdout(contains("match 1 / Anna"));
}

#[test]
fn test_hours_lists_work_and_duties() {
    let db_path = setup_test_db("hours_list");
    init_db_with_roster(&db_path);

    gr().args(["--db", &db_path, "hours"])
        .assert()
        .success()
        .stdout(contains("No work hours registered"));

    ok(&db_path, &["toggle", "1", "Bertil"]);
    ok(
        &db_path,
        &[
            "duty",
            "add",
            "--date",
            "2025-09-21",
            "--opponent",
            "Möte",
            "--person",
            "Anna",
            "--hours",
            "2",
        ],
    );

    gr().args(["--db", &db_path, "hours"])
        .assert()
        .success()
        .stdout(contains("Vakt"))
        .stdout(contains("Säkerhetsansvarig"))
        .stdout(contains("IFK Test"))
        .stdout(contains("Möte"))
        .stdout(contains("Work             : 1 entries, 4.5h (1 standard 4.5h, 0 deviating)"))
        .stdout(contains("Security         : 1 duties, 2.0h (avg 2.0h per duty)"))
        .stdout(contains("Total            : 2 entries, 6.5h"));

    gr().args(["--db", &db_path, "hours", "--person", "Bertil"])
        .assert()
        .success()
        .stdout(contains("Security         : 0 duties, 0.0h (avg 0.0h per duty)"))
        .stdout(contains("Total            : 1 entries, 4.5h"));
}

#[test]
fn test_unknown_person_reference_fails() {
    let db_path = setup_test_db("unknown_person");
    init_db(&db_path);

    gr().args(["--db", &db_path, "export", "--person", "Ghost"])
        .assert()
        .failure()
        .stderr(contains("Error: Person not found: Ghost"));
}
