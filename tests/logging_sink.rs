//! The file sink is process-global, so this lives in its own test binary.

use exfin::logging::{self, obj, v_num, v_str};

#[test]
fn events_land_in_log_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("LOG_DIR", dir.path());
    std::env::remove_var("LOG_LEVEL");

    logging::info(
        "fetch.fallback",
        "store unreachable, using demo data",
        obj(&[
            ("reason", v_str("connection refused")),
            ("rows", v_num(12.0)),
            ("apikey", v_str("should-not-appear")),
        ]),
    );

    let contents = std::fs::read_to_string(dir.path().join("events.jsonl")).unwrap();
    let line = contents.lines().next().unwrap();
    let entry: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(entry["lvl"], "info");
    assert_eq!(entry["event"], "fetch.fallback");
    assert_eq!(entry["data"]["reason"], "connection refused");
    assert_eq!(entry["data"]["apikey"], "[REDACTED]");
    assert!(entry["ts"].as_str().unwrap().contains('T'));
}
