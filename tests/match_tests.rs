use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gr, init_db, init_db_with_roster, ok, setup_test_db};

fn add_match(db_path: &str, date: &str, opponent: &str) {
    ok(
        db_path,
        &[
            "match",
            "add",
            "--date",
            date,
            "--time",
            "19:00",
            "--opponent",
            opponent,
        ],
    );
}

#[test]
fn test_match_add_validation() {
    let db_path = setup_test_db("match_add_validation");
    init_db(&db_path);

    // away without distance
    gr().args([
        "--db",
        &db_path,
        "match",
        "add",
        "--date",
        "2025-10-04",
        "--opponent",
        "AIK",
        "--type",
        "away",
    ])
    .assert()
    .failure()
    .stderr(contains("Away matches need a distance greater than 0"));

    // away with zero distance
    gr().args([
        "--db",
        &db_path,
        "match",
        "add",
        "--date",
        "2025-10-04",
        "--opponent",
        "AIK",
        "--type",
        "away",
        "--distance",
        "0",
    ])
    .assert()
    .failure()
    .stderr(contains("distance greater than 0"));

    // blank opponent
    gr().args([
        "--db",
        &db_path,
        "match",
        "add",
        "--date",
        "2025-10-04",
        "--opponent",
        "  ",
    ])
    .assert()
    .failure()
    .stderr(contains("Date, time and opponent are required"));

    // bad kickoff
    gr().args([
        "--db",
        &db_path,
        "match",
        "add",
        "--date",
        "2025-10-04",
        "--time",
        "7pm",
        "--opponent",
        "AIK",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));

    // bad date
    gr().args([
        "--db",
        &db_path,
        "match",
        "add",
        "--date",
        "2025-13-40",
        "--opponent",
        "AIK",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));

    gr().args(["--db", &db_path, "match", "list"])
        .assert()
        .success()
        .stdout(contains("No matches found"));
}

#[test]
fn test_match_add_rejects_infinite_distance() {
    let db_path = setup_test_db("match_distance_inf");
    init_db(&db_path);

    for distance in ["inf", "NaN"] {
        gr().args([
            "--db",
            &db_path,
            "match",
            "add",
            "--date",
            "2025-10-04",
            "--opponent",
            "AIK",
            "--type",
            "away",
            "--distance",
            distance,
        ])
        .assert()
        .failure()
        .stderr(contains("Away matches need a distance greater than 0"));
    }

    gr().args(["--db", &db_path, "match", "list"])
        .assert()
        .success()
        .stdout(contains("AIK").not());
}

#[test]
fn test_match_add_uses_defaults_and_tba() {
    let db_path = setup_test_db("match_add_defaults");
    init_db(&db_path);

    ok(
        &db_path,
        &[
            "match",
            "add",
            "--date",
            "2025-09-27",
            "--time",
            "tba",
            "--opponent",
            "Okänd",
        ],
    );

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (time, guards): (String, i64) = conn
        .query_row(
            "SELECT time, required_guards FROM matches WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .expect("match row");
    assert_eq!(time, "TBA");
    assert_eq!(guards, 4);
}

#[test]
fn test_match_list_groups_december_before_january() {
    let db_path = setup_test_db("match_list_months");
    init_db(&db_path);

    add_match(&db_path, "2026-01-10", "Januarimatch");
    add_match(&db_path, "2025-12-05", "Decembermatch");
    add_match(&db_path, "2025-09-20", "Septembermatch");

    let out = gr()
        .args(["--db", &db_path, "match", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).expect("utf8");

    let sep = out.find("september 2025").expect("september header");
    let dec = out.find("december 2025").expect("december header");
    let jan = out.find("januari 2026").expect("januari header");
    assert!(sep < dec);
    assert!(dec < jan);
}

#[test]
fn test_match_list_filter_and_collapse() {
    let db_path = setup_test_db("match_list_filter");
    init_db_with_roster(&db_path);

    gr().args(["--db", &db_path, "match", "list", "--filter", "away"])
        .assert()
        .success()
        .stdout(contains("AIK Borta").and(contains("IFK Test").not()));

    gr().args(["--db", &db_path, "match", "list", "--collapse", "2025-09"])
        .assert()
        .success()
        .stdout(contains("september 2025"))
        .stdout(contains("IFK Test").not())
        .stdout(contains("AIK Borta"));
}

#[test]
fn test_match_list_shows_staffing_and_mileage() {
    let db_path = setup_test_db("match_list_staffing");
    init_db_with_roster(&db_path);

    ok(&db_path, &["toggle", "2", "Anna"]);
    ok(&db_path, &["toggle", "2", "Bertil"]);
    ok(&db_path, &["toggle", "2", "Cecilia"]);

    gr().args(["--db", &db_path, "match", "list", "--filter", "away"])
        .assert()
        .success()
        .stdout(contains("3/4"))
        .stdout(contains("750 kr"))
        .stdout(contains("Anna, Bertil, Cecilia"));
}

#[test]
fn test_match_show_guard_details() {
    let db_path = setup_test_db("match_show");
    init_db_with_roster(&db_path);

    ok(&db_path, &["toggle", "1", "Anna"]);
    ok(
        &db_path,
        &["time", "1", "Anna", "--start", "17:00", "--end", "22:00"],
    );

    gr().args(["--db", &db_path, "match", "show", "1"])
        .assert()
        .success()
        .stdout(contains("Totalt denna säsong: 5.0h (1 matcher)"))
        .stdout(contains("17:00 - 22:00"))
        .stdout(contains("avviker från standard 4,5h"))
        .stdout(contains("Bertil (unassigned)"));

    gr().args(["--db", &db_path, "match", "show", "99"])
        .assert()
        .failure()
        .stderr(contains("Match not found: 99"));
}
