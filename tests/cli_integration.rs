use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const HISTORY: &str = r#"{"workoutId":"1","name":"Push","date":"2020-02-01T09:00:00Z"}
{"workoutId":"2","name":"Pull","date":"2020-03-02T09:00:00Z"}
{"workoutId":"3","name":"Legs","date":"2020-04-03T09:00:00Z"}
{"workoutId":"1","name":"Push","date":"2020-05-04T09:00:00Z"}
"#;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

/// Run the binary with HOME pointed at `home` so no user config leaks in
fn run_liftlog(args: &[&str], home: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_liftlog").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("liftlog.exe");
        } else {
            path.push("liftlog");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("run liftlog");
    (output.status.success(), output.stdout, output.stderr)
}

fn setup() -> (TempDir, PathBuf) {
    let root = tempfile::tempdir().expect("temp dir");
    let history = root.path().join("history.jsonl");
    write_file(&history, HISTORY);
    (root, history)
}

fn json_output(args: &[&str], home: &Path) -> Value {
    let (ok, stdout, stderr) = run_liftlog(args, home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    serde_json::from_slice(&stdout).expect("json")
}

#[test]
fn recent_json_reports_latest_workout_and_count() {
    let (root, history) = setup();
    let json = json_output(
        &["recent", "-j", "-f", history.to_str().unwrap(), "--timezone", "UTC"],
        root.path(),
    );
    assert_eq!(json["id"], "1");
    assert_eq!(json["name"], "Push");
    assert_eq!(json["count"], 2);
    assert_eq!(json["date"], "2020-05-04T09:00:00Z");
}

#[test]
fn recent_is_the_default_command() {
    let (root, history) = setup();
    let json = json_output(&["-j", "-f", history.to_str().unwrap()], root.path());
    assert_eq!(json["id"], "1");
}

#[test]
fn recent_json_is_null_when_filter_excludes_everything() {
    let (root, history) = setup();
    let json = json_output(
        &[
            "recent",
            "-j",
            "-f",
            history.to_str().unwrap(),
            "--timezone",
            "UTC",
            "--since",
            "2021-01-01",
        ],
        root.path(),
    );
    assert!(json.is_null());
}

#[test]
fn history_json_is_newest_first_by_default() {
    let (root, history) = setup();
    let json = json_output(&["history", "-j", "-f", history.to_str().unwrap()], root.path());
    let ids: Vec<&str> = json
        .as_array()
        .expect("array output")
        .iter()
        .map(|w| w["workoutId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["1", "3", "2", "1"]);
}

#[test]
fn history_json_ascending() {
    let (root, history) = setup();
    let json = json_output(
        &["history", "-j", "-o", "asc", "-f", history.to_str().unwrap()],
        root.path(),
    );
    let dates: Vec<&str> = json
        .as_array()
        .expect("array output")
        .iter()
        .map(|w| w["date"].as_str().unwrap())
        .collect();
    assert_eq!(
        dates,
        [
            "2020-02-01T09:00:00Z",
            "2020-03-02T09:00:00Z",
            "2020-04-03T09:00:00Z",
            "2020-05-04T09:00:00Z",
        ]
    );
}

#[test]
fn history_ascending_keeps_input_order_for_equal_dates() {
    let root = tempfile::tempdir().expect("temp dir");
    let history = root.path().join("history.jsonl");
    write_file(
        &history,
        r#"{"workoutId":"a","name":"Push","date":"2020-02-01T09:00:00Z"}
{"workoutId":"b","name":"Pull","date":"2020-02-01T09:00:00Z"}
{"workoutId":"c","name":"Legs","date":"2020-01-01T09:00:00Z"}
"#,
    );
    let ids = |order: &str| -> Vec<String> {
        json_output(
            &["history", "-j", "-o", order, "-f", history.to_str().unwrap()],
            root.path(),
        )
        .as_array()
        .expect("array output")
        .iter()
        .map(|w| w["workoutId"].as_str().unwrap().to_string())
        .collect()
    };
    assert_eq!(ids("asc"), ["c", "a", "b"]);
    assert_eq!(ids("desc"), ["a", "b", "c"]);
}

#[test]
fn history_date_filter_is_inclusive() {
    let (root, history) = setup();
    let json = json_output(
        &[
            "history",
            "-j",
            "-f",
            history.to_str().unwrap(),
            "--timezone",
            "UTC",
            "--since",
            "20200302",
            "--until",
            "2020-04-03",
        ],
        root.path(),
    );
    assert_eq!(json.as_array().expect("array output").len(), 2);
}

#[test]
fn workouts_json_groups_by_id() {
    let (root, history) = setup();
    let json = json_output(&["workouts", "-j", "-f", history.to_str().unwrap()], root.path());
    let arr = json.as_array().expect("array output");
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["workout_id"], "1");
    assert_eq!(arr[0]["count"], 2);
    assert_eq!(arr[0]["first_completed"], "2020-02-01T09:00:00Z");
}

#[test]
fn monthly_json_counts_completions() {
    let (root, history) = setup();
    let json = json_output(
        &[
            "monthly",
            "-j",
            "-o",
            "asc",
            "-f",
            history.to_str().unwrap(),
            "--timezone",
            "UTC",
        ],
        root.path(),
    );
    let arr = json.as_array().expect("array output");
    assert_eq!(arr.len(), 4);
    assert_eq!(arr[0]["month"], "2020-02");
    assert_eq!(arr[0]["completions"], 1);
}

#[test]
fn malformed_records_are_skipped_not_fatal() {
    let root = tempfile::tempdir().expect("temp dir");
    let history = root.path().join("history.jsonl");
    write_file(
        &history,
        r#"{"workoutId":"1","name":"Push","date":"2020-02-01"}
{not json}
{"workoutId":"2","name":"Pull","date":"not a date"}
"#,
    );
    let json = json_output(&["recent", "-j", "-f", history.to_str().unwrap()], root.path());
    assert_eq!(json["id"], "1");
    assert_eq!(json["count"], 1);
}

#[test]
fn directory_history_is_merged() {
    let root = tempfile::tempdir().expect("temp dir");
    let dir = root.path().join("history");
    write_file(
        &dir.join("2020.json"),
        r#"[{"workoutId":"1","name":"Push","date":"2020-02-01"}]"#,
    );
    write_file(
        &dir.join("2021").join("jan.jsonl"),
        r#"{"workoutId":"1","name":"Push","date":"2021-01-10"}"#,
    );
    let json = json_output(&["recent", "-j", "-f", dir.to_str().unwrap()], root.path());
    assert_eq!(json["count"], 2);
    assert_eq!(json["date"], "2021-01-10T00:00:00Z");
}

#[test]
fn history_file_from_config() {
    let (root, history) = setup();
    write_file(
        &root.path().join(".liftlog.toml"),
        &format!("file = {:?}\n", history.to_str().unwrap()),
    );
    let json = json_output(&["recent", "-j"], root.path());
    assert_eq!(json["id"], "1");
}

#[test]
fn missing_history_fails() {
    let root = tempfile::tempdir().expect("temp dir");
    let missing = root.path().join("nope.jsonl");
    let (ok, _stdout, stderr) = run_liftlog(&["-f", missing.to_str().unwrap()], root.path());
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("History not found"));
}

#[test]
fn invalid_since_fails() {
    let (root, history) = setup();
    let (ok, _stdout, stderr) = run_liftlog(
        &["-f", history.to_str().unwrap(), "--since", "last tuesday"],
        root.path(),
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Invalid date"));
}

#[test]
fn table_output_lists_workout() {
    let (root, history) = setup();
    let (ok, stdout, stderr) = run_liftlog(
        &["history", "--no-color", "-f", history.to_str().unwrap()],
        root.path(),
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("Workout History"));
    assert!(text.contains("Legs"));
    assert!(text.contains("4 completions from 1 file(s)"));
}

#[test]
fn check_username_ok() {
    let root = tempfile::tempdir().expect("temp dir");
    let (ok, stdout, _stderr) = run_liftlog(&["check", "username", "jane.doe"], root.path());
    assert!(ok);
    assert_eq!(String::from_utf8_lossy(&stdout).trim(), "OK");
}

#[test]
fn check_password_failure_sets_exit_status() {
    let root = tempfile::tempdir().expect("temp dir");
    let (ok, stdout, _stderr) = run_liftlog(&["check", "password", "short"], root.path());
    assert!(!ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("password must be at least 8 characters"));
    assert!(text.contains("password must contain a number"));
}

#[test]
fn check_uses_rules_from_config() {
    let root = tempfile::tempdir().expect("temp dir");
    write_file(
        &root.path().join(".liftlog.toml"),
        "[password]\nmin_length = 4\nrequire_number = false\n",
    );
    let (ok, stdout, stderr) = run_liftlog(&["check", "password", "abcd", "-j"], root.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["valid"], true);
    assert_eq!(json["errors"].as_array().unwrap().len(), 0);
}
