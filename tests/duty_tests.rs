use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gr, init_db_with_roster, ok, setup_test_db};

fn add_duty_args<'a>(db_path: &'a str, person: &'a str, hours: &'a str) -> Vec<&'a str> {
    vec![
        "--db",
        db_path,
        "duty",
        "add",
        "--date",
        "2025-10-11",
        "--opponent",
        "Derby",
        "--person",
        person,
        "--hours",
        hours,
    ]
}

#[test]
fn test_duty_requires_security_responsible() {
    let db_path = setup_test_db("duty_requires_sec");
    init_db_with_roster(&db_path);

    gr().args(add_duty_args(&db_path, "Bertil", "3"))
        .assert()
        .failure()
        .stderr(contains("Bertil is not security responsible"));

    gr().args(add_duty_args(&db_path, "Okänd Person", "3"))
        .assert()
        .failure()
        .stderr(contains("Person not found"));
}

#[test]
fn test_duty_rejects_non_positive_hours() {
    let db_path = setup_test_db("duty_hours_positive");
    init_db_with_roster(&db_path);

    gr().args(add_duty_args(&db_path, "Anna", "0"))
        .assert()
        .failure()
        .stderr(contains("Hours must be greater than 0"));

    gr().args([
        "--db",
        &db_path,
        "duty",
        "add",
        "--date",
        "2025-10-11",
        "--opponent",
        "Derby",
        "--person",
        "Anna",
    ])
    .assert()
    .failure()
    .stderr(contains("Date, match, person and hours are required"));
}

#[test]
fn test_duty_rejects_non_finite_hours_and_mileage() {
    let db_path = setup_test_db("duty_non_finite");
    init_db_with_roster(&db_path);

    for hours in ["inf", "NaN"] {
        gr().args(add_duty_args(&db_path, "Anna", hours))
            .assert()
            .failure()
            .stderr(contains("Hours must be greater than 0"));
    }

    for mileage in ["--mileage=inf", "--mileage=NaN", "--mileage=-5"] {
        let mut args = add_duty_args(&db_path, "Anna", "3");
        args.push(mileage);
        gr().args(args)
            .assert()
            .failure()
            .stderr(contains("Mileage must be a number of 0 or more"));
    }

    // nothing was written
    gr().args(["--db", &db_path, "duty", "list"])
        .assert()
        .success()
        .stdout(contains("No security duties registered"));
}

#[test]
fn test_duty_edit_rejects_negative_mileage() {
    let db_path = setup_test_db("duty_edit_mileage");
    init_db_with_roster(&db_path);

    gr().args(add_duty_args(&db_path, "Anna", "3")).assert().success();

    gr().args(["--db", &db_path, "duty", "edit", "1", "--mileage=-5"])
        .assert()
        .failure()
        .stderr(contains("Mileage must be a number of 0 or more"));
}

#[test]
fn test_duty_list_shows_compensation_summary() {
    let db_path = setup_test_db("duty_list_summary");
    init_db_with_roster(&db_path);

    let mut args = add_duty_args(&db_path, "Anna", "3.5");
    args.push("--mileage=120");
    gr().args(args).assert().success();

    // 3.5h × 285 + 120 = 1 117.5 → 1 118 kr
    gr().args(["--db", &db_path, "duty", "list"])
        .assert()
        .success()
        .stdout(contains("Total"))
        .stdout(contains("1 118 kr"))
        .stdout(contains("Duties           : 1"))
        .stdout(contains("Salary           : 998 kr (285 kr/h)"))
        .stdout(contains("Mileage          : 120 kr"))
        .stdout(contains("Per security responsible"))
        .stdout(contains("Anna: 1 duties, 3.5h, 1 118 kr"));
}

#[test]
fn test_duty_edit_with_removed_owner_needs_person() {
    let db_path = setup_test_db("duty_removed_owner");
    init_db_with_roster(&db_path);

    gr().args(add_duty_args(&db_path, "Anna", "2")).assert().success();
    ok(&db_path, &["person", "del", "Anna"]);

    gr().args(["--db", &db_path, "duty", "edit", "1", "--hours", "4"])
        .assert()
        .failure()
        .stderr(contains("no longer on the roster; pass --person"));

    ok(&db_path, &["person", "add", "Dora", "--role", "R", "--security"]);
    ok(&db_path, &["duty", "edit", "1", "--hours", "4", "--person", "Dora"]);

    gr().args(["--db", &db_path, "duty", "list"])
        .assert()
        .success()
        .stdout(contains("Dora").and(contains("4.0h")));
}

#[test]
fn test_duty_add_edit_delete() {
    let db_path = setup_test_db("duty_crud");
    init_db_with_roster(&db_path);

    gr().args([
        "--db",
        &db_path,
        "duty",
        "add",
        "--date",
        "2025-10-11",
        "--opponent",
        "Derby",
        "--person",
        "Anna",
        "--hours",
        "3.5",
        "--mileage",
        "120",
        "--notes",
        "Planering, möte",
    ])
    .assert()
    .success()
    .stdout(contains("Security duty 1 registered for Anna (3.5h)"));

    gr().args(["--db", &db_path, "duty", "list"])
        .assert()
        .success()
        .stdout(contains("Derby"))
        .stdout(contains("3.5h"))
        .stdout(contains("120 kr"));

    ok(
        &db_path,
        &["duty", "edit", "1", "--hours", "5", "--opponent", "Derby (final)"],
    );

    gr().args(["--db", &db_path, "duty", "list"])
        .assert()
        .success()
        .stdout(contains("Derby (final)").and(contains("5.0h")))
        .stdout(contains("120 kr"));

    ok(&db_path, &["duty", "del", "1"]);

    gr().args(["--db", &db_path, "duty", "list"])
        .assert()
        .success()
        .stdout(contains("No security duties registered"));

    gr().args(["--db", &db_path, "duty", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("Security duty not found: 1"));
}

#[test]
fn test_duty_keeps_owner_after_rename_in_store() {
    let db_path = setup_test_db("duty_owner_fk");
    init_db_with_roster(&db_path);

    ok(
        &db_path,
        &[
            "duty",
            "add",
            "--date",
            "2025-10-11",
            "--opponent",
            "Derby",
            "--person",
            "Anna",
            "--hours",
            "2",
        ],
    );

    // rename directly in the store; the duty stays Anna's via its id
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute("UPDATE personnel SET name = 'Anna B' WHERE id = 1", [])
        .expect("rename");

    gr().args(["--db", &db_path, "hours", "--person", "Anna B"])
        .assert()
        .success()
        .stdout(contains("Derby"))
        .stdout(contains("Säkerhetsansvarig"));
}
