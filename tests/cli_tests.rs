use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{gt, init_empty_db, setup_test_db, temp_out};

const MAY_PUNCHES: &str = r#"[
  {"id": 1, "userId": 1, "type": "in", "timestamp": "2024-05-20T07:00:00.000Z",
   "location": {"latitude": 45.4642, "longitude": 9.19}},
  {"id": 2, "userId": 1, "type": "out", "timestamp": "2024-05-20T15:00:00.000Z",
   "location": {"latitude": 45.4642, "longitude": 9.19}},
  {"id": 3, "userId": 2, "type": "in", "timestamp": "2024-05-21T07:00:00.000Z",
   "location": {"latitude": 41.9, "longitude": 12.5}}
]"#;

fn import_may(db_path: &str, name: &str) {
    let doc = temp_out(name, "json");
    fs::write(&doc, MAY_PUNCHES).unwrap();

    gt().args(["--db", db_path, "--test", "import", "--file", &doc])
        .assert()
        .success()
        .stdout(contains("Imported 2 punches"))
        .stdout(contains("Skipped 1 punches of other users"));
}

#[test]
fn test_init_seeds_sample_data() {
    let db_path = setup_test_db("cli_init_seed");

    gt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("Inserted 4 sample punches"));

    // a second init keeps the existing punches
    gt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("sample data skipped"));

    gt().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Hello, Mario Rossi"))
        .stdout(contains("Not in service"))
        .stdout(contains("Last punch: Exit at 18:02"))
        .stdout(contains("CLOCK IN"));
}

#[test]
fn test_first_use_without_init_is_seeded() {
    let db_path = setup_test_db("cli_first_use_seed");

    gt().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Not in service"))
        .stdout(contains("Last punch: Exit at 18:02"));

    // only the first open seeds
    gt().args(["--db", &db_path, "--test", "export", "--file", &temp_out("cli_first_use_seed", "json")])
        .assert()
        .success()
        .stdout(contains("(4 events)"));
}

#[test]
fn test_clock_in_and_out() {
    let db_path = setup_test_db("cli_clock");
    init_empty_db(&db_path);

    gt().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Not in service"))
        .stdout(contains("Last punch").not());

    gt().args(["--db", &db_path, "--test", "clock", "--lat", "40.7580", "--lon", "-73.9855"])
        .assert()
        .success()
        .stdout(contains("Entry recorded at"))
        .stdout(contains("40.7580, -73.9855"))
        .stdout(contains("In service"))
        .stdout(contains("CLOCK OUT"));

    gt().args(["--db", &db_path, "--test", "clock", "--lat", "40.7580", "--lon", "-73.9855"])
        .assert()
        .success()
        .stdout(contains("Exit recorded at"))
        .stdout(contains("CLOCK IN"));

    gt().args(["--db", &db_path, "--test", "timesheet"])
        .assert()
        .success()
        .stdout(contains("1 days, 1 complete"));
}

#[test]
fn test_clock_without_location_fails() {
    let db_path = setup_test_db("cli_clock_no_location");
    init_empty_db(&db_path);

    gt().args(["--db", &db_path, "--test", "clock"])
        .assert()
        .failure()
        .stderr(contains("Geolocation is not supported on this device."));

    // --lat alone is rejected by the parser
    gt().args(["--db", &db_path, "--test", "clock", "--lat", "45.0"])
        .assert()
        .failure();
}

#[test]
fn test_wrong_credentials() {
    let db_path = setup_test_db("cli_wrong_credentials");
    init_empty_db(&db_path);

    gt().args([
        "--db",
        &db_path,
        "--test",
        "--email",
        "utente@test.com",
        "--password",
        "nope",
        "status",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid credentials"));
}

#[test]
fn test_timesheet_and_detail_after_import() {
    let db_path = setup_test_db("cli_timesheet_import");
    init_empty_db(&db_path);
    import_may(&db_path, "cli_timesheet_import_doc");

    gt().args(["--db", &db_path, "--test", "timesheet", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(contains("May 2024"))
        .stdout(contains("8h 0m"))
        .stdout(contains("1 days, 1 complete, worked 8h 0m"));

    gt().args(["--db", &db_path, "--test", "timesheet", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(contains("No punches"));

    gt().args(["--db", &db_path, "--test", "timesheet", "--period", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));

    gt().args(["--db", &db_path, "--test", "detail", "2024-05-21"])
        .assert()
        .success()
        .stdout(contains("No data selected."));

    gt().args(["--db", &db_path, "--test", "detail", "20-05-2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_import_twice_skips_duplicates() {
    let db_path = setup_test_db("cli_import_twice");
    init_empty_db(&db_path);
    import_may(&db_path, "cli_import_twice_doc");

    let doc = temp_out("cli_import_twice_again", "json");
    fs::write(&doc, MAY_PUNCHES).unwrap();
    gt().args(["--db", &db_path, "--test", "import", "--file", &doc])
        .assert()
        .success()
        .stdout(contains("Imported 0 punches"))
        .stdout(contains("Skipped 2 punches already present"));
}

#[test]
fn test_import_rejects_bad_coordinates() {
    let db_path = setup_test_db("cli_import_bad");
    init_empty_db(&db_path);

    let doc = temp_out("cli_import_bad_doc", "json");
    fs::write(
        &doc,
        r#"[{"id": 1, "userId": 1, "kind": "in", "timestamp": "2024-05-20T07:00:00Z",
            "location": {"latitude": 123.0, "longitude": 9.19}}]"#,
    )
    .unwrap();

    gt().args(["--db", &db_path, "--test", "import", "--file", &doc])
        .assert()
        .failure()
        .stderr(contains("out-of-range coordinates"));
}

#[test]
fn test_config_print() {
    let db_path = setup_test_db("cli_config_print");

    gt().args(["--db", &db_path, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("utente@test.com"))
        .stdout(contains("latency_ms: 0"));
}

#[test]
fn test_log_print_after_init() {
    let db_path = setup_test_db("cli_log_print");

    gt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    gt().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("Inserted 4 sample events"))
        .stdout(contains("Database initialized"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_empty_db(&db_path);

    let plain = temp_out("cli_backup_plain", "sqlite");
    gt().args(["--db", &db_path, "--test", "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).unwrap().len() > 0);

    let zipped = temp_out("cli_backup_zip", "zip");
    gt().args(["--db", &db_path, "--test", "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(fs::metadata(&zipped).is_ok());

    gt().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("backup"));
}
