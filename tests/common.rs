#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use attendbook::core::KeyValueStore;
use attendbook::db::kv::SqliteStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const STORAGE_KEY: &str = "attendance_data_v1";

/// Binary under test, isolated from the user's own configuration.
pub fn atb() -> Command {
    let home = env::temp_dir().join("attendbook_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("attendbook");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env("NO_COLOR", "1")
        .env_remove("ATTENDBOOK_DATABASE");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendbook.sqlite", name));
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

/// Initialize the DB without touching the config file.
pub fn init_db(db_path: &str) {
    atb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a student on `day`.
pub fn add(db_path: &str, day: &str, name: &str) {
    atb()
        .args(["--db", db_path, "--date", day, "add", name])
        .assert()
        .success();
}

/// Mark student `id` present on `day`.
pub fn mark(db_path: &str, day: &str, id: &str) {
    atb()
        .args(["--db", db_path, "--date", day, "mark", id])
        .assert()
        .success();
}

/// Write a raw value under the storage key, bypassing validation.
pub fn write_raw(db_path: &str, raw: &str) {
    let mut store = SqliteStore::open(db_path).expect("open db");
    store.set(STORAGE_KEY, raw).expect("write raw value");
}

/// Raw value currently stored under the storage key.
pub fn read_raw(db_path: &str) -> Option<String> {
    let store = SqliteStore::open(db_path).expect("open db");
    store.get(STORAGE_KEY).expect("read raw value")
}
