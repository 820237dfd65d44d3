use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{add, atb, init_db, mark, setup_test_db, temp_out};

/// Kim present on day one, absent on day two; Lee only on day two.
fn two_day_dataset(db_path: &str) {
    init_db(db_path);
    add(db_path, "2024-05-01", "Kim");
    mark(db_path, "2024-05-01", "1");
    add(db_path, "2024-05-02", "Kim");
    add(db_path, "2024-05-02", "Lee");
    mark(db_path, "2024-05-02", "2");
}

#[test]
fn test_export_csv_pivot() {
    let db_path = setup_test_db("export_csv_pivot");
    two_day_dataset(&db_path);

    let out = temp_out("export_csv_pivot", "csv");

    atb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "번호,이름,2024-05-01,2024-05-02,출석률");
    assert_eq!(lines[1], "1,Kim,출석,결석,50");
    // not on the first day's roster: absent there, not omitted
    assert_eq!(lines[2], "2,Lee,결석,출석,50");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    two_day_dataset(&db_path);

    let out = temp_out("export_json", "json");

    atb()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(value[1]["name"], "Lee");
    assert_eq!(value[1]["attendance"]["2024-05-01"], false);
    assert_eq!(value[1]["attendance"]["2024-05-02"], true);
}

#[cfg(feature = "xlsx")]
#[test]
fn test_export_xlsx_default_format() {
    let db_path = setup_test_db("export_xlsx");
    two_day_dataset(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    atb()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_archive_fails_without_file() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "xlsx");

    atb()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("No attendance data has been saved yet"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let db_path = setup_test_db("export_overwrite");
    two_day_dataset(&db_path);

    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed existing file");

    atb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    atb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("번호"));
}
