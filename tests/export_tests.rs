use geotimbra::core::import::ImportLogic;
use geotimbra::export::{EventExport, ExportFormat, ExportLogic};
use geotimbra::models::event_type::EventKind::{In, Out};
use predicates::str::contains;
use std::fs;

mod common;
use common::{event, gt, init_empty_db, setup_test_db, temp_out, utc};

#[test]
fn test_export_json_is_importable() {
    let events = vec![
        event(1, In, utc(2024, 5, 20, 7, 0, 0)),
        event(2, Out, utc(2024, 5, 20, 15, 0, 0)),
    ];
    let path = temp_out("export_json_importable", "json");

    ExportLogic::export(&events, ExportFormat::Json, &path, false).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"userId\": 1"));
    assert!(raw.contains("\"kind\": \"in\""));
    assert!(raw.contains("\"timestamp\": \"2024-05-20T07:00:00"));

    let back = ImportLogic::parse(&raw).unwrap();
    assert_eq!(back, events);
}

#[test]
fn test_export_csv_rows() {
    let events = vec![event(1, In, utc(2024, 5, 20, 7, 0, 0))];
    let path = temp_out("export_csv_rows", "csv");

    ExportLogic::export(&events, ExportFormat::Csv, &path, false).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let mut lines = raw.lines();
    assert_eq!(
        lines.next(),
        Some("id,user_id,kind,timestamp,local_date,local_time,latitude,longitude")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("1,1,in,2024-05-20T07:00:00.000Z,"));
    assert!(row.ends_with(",45.4642,9.19"));
    assert_eq!(EventExport::from(&events[0]).kind, "in");
}

#[test]
fn test_filter_period() {
    let events = vec![
        event(1, In, utc(2024, 4, 15, 12, 0, 0)),
        event(2, In, utc(2024, 5, 15, 12, 0, 0)),
        event(3, In, utc(2025, 1, 15, 12, 0, 0)),
    ];

    let ids = |p: Option<&str>| -> Vec<i64> {
        ExportLogic::filter_period(events.clone(), p)
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect()
    };

    assert_eq!(ids(None), vec![1, 2, 3]);
    assert_eq!(ids(Some("all")), vec![1, 2, 3]);
    assert_eq!(ids(Some("2024")), vec![1, 2]);
    assert_eq!(ids(Some("2024-05")), vec![2]);
    assert_eq!(ids(Some("2024-05:2025-01")), vec![2, 3]);
    assert!(ExportLogic::filter_period(events.clone(), Some("someday")).is_err());
    assert!(ExportLogic::filter_period(events, Some("2025:2024")).is_err());
}

#[test]
fn test_import_accepts_legacy_type_field() {
    let raw = r#"[{"id": 5, "userId": 1, "type": "out", "timestamp": "2024-05-20T15:00:00.000Z",
                  "location": {"latitude": 45.0, "longitude": 9.0}}]"#;
    let events = ImportLogic::parse(raw).unwrap();
    assert_eq!(events[0].kind, Out);
    assert_eq!(events[0].timestamp, utc(2024, 5, 20, 15, 0, 0));

    assert!(ImportLogic::parse(r#"[{"id": 1}]"#).is_err());
}

#[test]
fn test_cli_export_round_trip() {
    let src_db = setup_test_db("export_round_trip_src");
    gt().args(["--db", &src_db, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_round_trip", "json");
    gt().args(["--db", &src_db, "--test", "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"))
        .stdout(contains("(4 events)"));

    let dst_db = setup_test_db("export_round_trip_dst");
    init_empty_db(&dst_db);
    gt().args(["--db", &dst_db, "--test", "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 4 punches"));

    // existing file, no --force, declined on empty stdin
    gt().args(["--db", &src_db, "--test", "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    gt().args(["--db", &src_db, "--test", "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));
}

#[test]
fn test_cli_export_empty_period_warns() {
    let db_path = setup_test_db("export_empty_period");
    init_empty_db(&db_path);

    let out = temp_out("export_empty_period", "csv");
    gt().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--period", "1999",
    ])
    .assert()
    .success()
    .stdout(contains("No events match the selected period"))
    .stdout(contains("(0 events)"));
}
