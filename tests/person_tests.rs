use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{count_work_hours, gr, init_db, init_db_with_roster, ok, setup_test_db};

#[test]
fn test_person_list_regulars_first() {
    let db_path = setup_test_db("person_list_order");
    init_db(&db_path);

    ok(&db_path, &["person", "add", "Ärla", "--role", "E"]);
    ok(&db_path, &["person", "add", "Zlatan", "--role", "R"]);
    ok(&db_path, &["person", "add", "adam", "--role", "E"]);

    let out = gr()
        .args(["--db", &db_path, "person", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).expect("utf8");

    let zlatan = out.find("Zlatan").expect("Zlatan listed");
    let adam = out.find("adam").expect("adam listed");
    let arla = out.find("Ärla").expect("Ärla listed");
    assert!(zlatan < adam, "regulars come before extras");
    assert!(adam < arla, "extras sorted by name");
}

#[test]
fn test_person_add_rejects_duplicate_and_empty() {
    let db_path = setup_test_db("person_add_reject");
    init_db(&db_path);

    ok(&db_path, &["person", "add", "Anna"]);

    gr().args(["--db", &db_path, "person", "add", "Anna"])
        .assert()
        .failure()
        .stderr(contains("Person already exists: Anna"));

    gr().args(["--db", &db_path, "person", "add", "   "])
        .assert()
        .failure()
        .stderr(contains("Name must not be empty"));

    gr().args(["--db", &db_path, "person", "add", "Bo", "--role", "X"])
        .assert()
        .failure()
        .stderr(contains("Invalid role"));
}

#[test]
fn test_person_edit_changes_role_and_flag() {
    let db_path = setup_test_db("person_edit");
    init_db_with_roster(&db_path);

    ok(
        &db_path,
        &["person", "edit", "Cecilia", "--role", "R", "--security", "true"],
    );

    // Cecilia can now take a security duty
    ok(
        &db_path,
        &[
            "duty",
            "add",
            "--date",
            "2025-11-01",
            "--opponent",
            "Cupfinal",
            "--person",
            "Cecilia",
            "--hours",
            "3",
        ],
    );

    gr().args(["--db", &db_path, "person", "list"])
        .assert()
        .success()
        .stdout(contains("Cecilia").and(contains("regular")));
}

#[test]
fn test_person_delete_removes_assignments_and_hours() {
    let db_path = setup_test_db("person_delete_cascade");
    init_db_with_roster(&db_path);

    ok(&db_path, &["toggle", "1", "Bertil"]);
    ok(&db_path, &["toggle", "2", "Bertil"]);
    assert_eq!(count_work_hours(&db_path, 1, 2), 1);

    gr().args(["--db", &db_path, "person", "del", "Bertil"])
        .assert()
        .success()
        .stdout(contains("Deleted Bertil"));

    assert_eq!(count_work_hours(&db_path, 1, 2), 0);
    assert_eq!(count_work_hours(&db_path, 2, 2), 0);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let assignments: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM assignments WHERE personnel_id = 2",
            [],
            |r| r.get(0),
        )
        .expect("count");
    assert_eq!(assignments, 0);

    gr().args(["--db", &db_path, "person", "del", "Bertil"])
        .assert()
        .failure()
        .stderr(contains("Person not found"));
}
