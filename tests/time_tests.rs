use predicates::str::contains;

mod common;
use common::{count_work_hours, gr, init_db_with_roster, ok, setup_test_db};
use guardroster::core::time_entry::validate_entry;

#[test]
fn test_time_replaces_entry_for_working_pair() {
    let db_path = setup_test_db("time_replace");
    init_db_with_roster(&db_path);

    ok(&db_path, &["toggle", "1", "Anna"]);

    gr().args([
        "--db", &db_path, "time", "1", "Anna", "--start", "16:30", "--end", "21:30", "--notes",
        "Tidig samling",
    ])
    .assert()
    .success()
    .stdout(contains("Anna: 16:30 - 21:30 (5h)"))
    .stderr(contains("Deviates from the 4.5h standard shift"));

    assert_eq!(count_work_hours(&db_path, 1, 1), 1);

    gr().args(["--db", &db_path, "hours", "--person", "Anna"])
        .assert()
        .success()
        .stdout(contains("16:30 - 21:30"))
        .stdout(contains("5.0h *"))
        .stdout(contains("Tidig samling"));
}

#[test]
fn test_time_rejects_end_before_start() {
    let db_path = setup_test_db("time_end_before_start");
    init_db_with_roster(&db_path);

    ok(&db_path, &["toggle", "1", "Anna"]);

    gr().args([
        "--db", &db_path, "time", "1", "Anna", "--start", "21:00", "--end", "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("must be later than start time"));

    gr().args(["--db", &db_path, "time", "1", "Anna", "--start", "17:00"])
        .assert()
        .failure()
        .stderr(contains("Both start and end time are required"));

    gr().args([
        "--db", &db_path, "time", "1", "Anna", "--start", "17:00", "--end", "25:99",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));

    // the default entry survived every rejected save
    gr().args(["--db", &db_path, "hours", "--person", "Anna"])
        .assert()
        .success()
        .stdout(contains("17:00 - 21:30"));
}

#[test]
fn test_time_requires_working_assignment() {
    let db_path = setup_test_db("time_requires_working");
    init_db_with_roster(&db_path);

    gr().args([
        "--db", &db_path, "time", "1", "Bertil", "--start", "17:00", "--end", "21:30",
    ])
    .assert()
    .failure()
    .stderr(contains("Bertil is not working the match against IFK Test"));

    assert_eq!(count_work_hours(&db_path, 1, 2), 0);
}

#[test]
fn test_validate_entry() {
    let (s, e, h) = validate_entry(Some("17:00"), Some("21:30")).expect("valid");
    assert_eq!((s.as_str(), e.as_str(), h), ("17:00", "21:30", 4.5));

    assert!(validate_entry(Some("18:00"), Some("18:00")).is_err());
    assert!(validate_entry(None, Some("18:00")).is_err());
}

#[test]
fn test_time_without_times_keeps_window_and_updates_notes() {
    let db_path = setup_test_db("time_prefill");
    init_db_with_roster(&db_path);

    ok(&db_path, &["toggle", "2", "Cecilia"]);
    ok(
        &db_path,
        &["time", "2", "Cecilia", "--notes", "Kom med tåget"],
    );

    gr().args(["--db", &db_path, "hours", "--person", "Cecilia"])
        .assert()
        .success()
        .stdout(contains("13:00 - 17:30"))
        .stdout(contains("Kom med tåget"));
}
