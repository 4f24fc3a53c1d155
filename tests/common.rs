#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use geotimbra::models::event::ClockEvent;
use geotimbra::models::event_type::EventKind;
use geotimbra::models::location::Location;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gt() -> Command {
    cargo_bin_cmd!("geotimbra")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_geotimbra.sqlite", name));
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

/// Initialize an empty DB (no sample punches) through the CLI
pub fn init_empty_db(db_path: &str) {
    gt().args(["--db", db_path, "--test", "init", "--no-seed"])
        .assert()
        .success();
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn milan() -> Location {
    Location::new(45.4642, 9.19)
}

pub fn event(id: i64, kind: EventKind, timestamp: DateTime<Utc>) -> ClockEvent {
    ClockEvent {
        id,
        user_id: 1,
        kind,
        timestamp,
        location: milan(),
    }
}
