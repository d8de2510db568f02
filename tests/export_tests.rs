use predicates::str::contains;
use std::fs;

mod common;
use common::{gr, init_db, init_db_with_roster, ok, setup_test_db, temp_out};

const HEADER: &str = "Typ,Datum,Match/Uppdrag,Personal,Starttid,Sluttid,Timmar,Milersättning,Anteckningar";

/// Roster plus: Anna and Bertil on the home match, Anna on the away match,
/// and one security duty for Anna between the two matches.
fn seed(db_path: &str) {
    init_db_with_roster(db_path);
    ok(db_path, &["toggle", "1", "Anna"]);
    ok(db_path, &["toggle", "1", "Bertil"]);
    ok(db_path, &["toggle", "2", "Anna"]);
    ok(
        db_path,
        &[
            "duty",
            "add",
            "--date",
            "2025-09-27",
            "--opponent",
            "Cupmatch",
            "--person",
            "Anna",
            "--hours",
            "3",
            "--mileage",
            "80",
            "--notes",
            "Ledning, kassa",
        ],
    );
}

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    seed(&db_path);
    let out = temp_out("export_csv_all", "csv");

    gr().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 4 rows"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines.len(), 5);
    assert!(content.contains("\"Bertil\""));
}

#[test]
fn test_export_single_person_sorted_desc() {
    let db_path = setup_test_db("export_single_person");
    seed(&db_path);
    let out = temp_out("export_single_person", "csv");

    ok(&db_path, &["export", "--person", "Anna", "--file", &out]);

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 4, "two work rows and one duty");
    assert!(!content.contains("Bertil"));

    // newest first: away match, duty, home match
    assert!(lines[1].contains("\"2025-10-04\""));
    assert!(lines[2].contains("\"2025-09-27\""));
    assert!(lines[3].contains("\"2025-09-20\""));

    // work row: blank mileage, auto note
    assert!(lines[1].starts_with("\"Vakt\""));
    assert!(lines[1].contains("\"13:00\",\"17:30\",4.5,\"\""));

    // duty row: dashes for times, notes with comma stay in one quoted field
    assert!(lines[2].starts_with("\"Säkerhetsansvarig\""));
    assert!(lines[2].contains("\"-\",\"-\",3,80,\"Ledning, kassa\""));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    seed(&db_path);
    let out = temp_out("export_json", "json");

    ok(
        &db_path,
        &["export", "--format", "json", "--person", "Bertil", "--file", &out],
    );

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["kind"], "work");
    assert_eq!(rows[0]["personnel"], "Bertil");
    assert_eq!(rows[0]["hours"], 4.5);
    assert!(rows[0]["mileage"].is_null());
}

#[test]
fn test_export_empty_writes_header_only() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);
    let out = temp_out("export_empty", "csv");

    gr().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stderr(contains("No work entries or security duties to export"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.trim_end(), HEADER);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    seed(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").expect("write");

    gr().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    ok(&db_path, &["export", "--file", &out, "--force"]);
    assert!(fs::read_to_string(&out).expect("read").starts_with(HEADER));
}

#[test]
fn test_export_default_file_name() {
    let db_path = setup_test_db("export_default_name");
    seed(&db_path);

    let dir = std::env::temp_dir().join("guardroster_export_default_name");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create dir");

    gr().current_dir(&dir)
        .args(["--db", &db_path, "export", "--person", "Anna"])
        .assert()
        .success();
    assert!(dir.join("arbetstid_Anna.csv").exists());

    gr().current_dir(&dir)
        .args(["--db", &db_path, "export"])
        .assert()
        .success();
    assert!(dir.join("arbetstid_alla.csv").exists());
}

#[test]
fn test_render_csv_escapes_quotes_in_notes() {
    use guardroster::export::{EntryKind, ExportRow, render_csv};

    let rows = vec![ExportRow {
        kind: EntryKind::Security,
        date: None,
        opponent: "Möte".to_string(),
        personnel: "Anna".to_string(),
        start_time: "-".to_string(),
        end_time: "-".to_string(),
        hours: 1.5,
        mileage: Some(0.0),
        notes: "sa \"hej\", gick".to_string(),
    }];

    let csv = render_csv(&rows).expect("render");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], HEADER);
    assert_eq!(
        lines[1],
        "\"Säkerhetsansvarig\",\"\",\"Möte\",\"Anna\",\"-\",\"-\",1.5,0,\"sa \"\"hej\"\", gick\""
    );
}
