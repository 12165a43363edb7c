//! CLI integration tests
//!
//! Run the built `planwatch` binary against snapshot, message and config
//! files in a temporary directory.

use planwatch_core_types::schema::FIELD_REQUEST_ID;
use rusqlite::Connection;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn planwatch(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_planwatch"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        stderr(output)
    );
}

fn lesson(day: u32, hour: u32, name: &str, classroom: &str) -> Value {
    json!({
        "name": name,
        "day": day,
        "hour": hour,
        "time": "08:00-08:45",
        "classroom": classroom,
        "teacher": "Smith"
    })
}

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// old.json / new.json where Monday period 2 changes room and Tuesday is untouched
fn write_plans(dir: &Path) -> (PathBuf, PathBuf) {
    let old = write_json(
        dir,
        "old.json",
        &json!([lesson(0, 2, "Physics", "LAB1"), lesson(1, 1, "Math", "101")]),
    );
    let new = write_json(
        dir,
        "new.json",
        &json!([lesson(0, 2, "Physics", "LAB2"), lesson(1, 1, "Math", "101")]),
    );
    (old, new)
}

#[test]
fn test_compare_identical_snapshots() {
    let temp = TempDir::new().unwrap();
    let (old, _) = write_plans(temp.path());

    let output = planwatch(
        temp.path(),
        &["schedule", "compare", "--old", old.to_str().unwrap(), "--new", old.to_str().unwrap()],
    );

    assert_success(&output);
    assert_eq!(stdout(&output), "No changes.\n");
}

#[test]
fn test_compare_prints_summary() {
    let temp = TempDir::new().unwrap();
    let (old, new) = write_plans(temp.path());

    let output = planwatch(
        temp.path(),
        &["schedule", "compare", "--old", old.to_str().unwrap(), "--new", new.to_str().unwrap()],
    );

    assert_success(&output);
    let out = stdout(&output);
    assert!(out.starts_with("Lesson plan changes (1 modified, 0 removed, 0 added)"));
    assert!(out.contains("~ MONDAY, lesson 2 (08:00-08:45): Physics (Smith, LAB1) → Physics (Smith, LAB2)"));
}

#[test]
fn test_compare_json_output() {
    let temp = TempDir::new().unwrap();
    let (old, new) = write_plans(temp.path());

    let output = planwatch(
        temp.path(),
        &[
            "schedule",
            "compare",
            "--old",
            old.to_str().unwrap(),
            "--new",
            new.to_str().unwrap(),
            "--format",
            "json",
        ],
    );

    assert_success(&output);
    let deltas: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let deltas = deltas.as_array().unwrap();
    assert_eq!(deltas.len(), 1);
    assert_eq!(deltas[0]["before"]["classroom"], "LAB1");
    assert_eq!(deltas[0]["after"]["classroom"], "LAB2");
}

#[test]
fn test_compare_day_filter() {
    let temp = TempDir::new().unwrap();
    let (old, new) = write_plans(temp.path());

    let output = planwatch(
        temp.path(),
        &[
            "schedule",
            "compare",
            "--old",
            old.to_str().unwrap(),
            "--new",
            new.to_str().unwrap(),
            "--day",
            "1",
        ],
    );

    assert_success(&output);
    assert_eq!(stdout(&output), "No changes.\n");
}

#[test]
fn test_compare_update_replaces_old_snapshot() {
    let temp = TempDir::new().unwrap();
    let (old, new) = write_plans(temp.path());
    let args = [
        "schedule",
        "compare",
        "--old",
        old.to_str().unwrap(),
        "--new",
        new.to_str().unwrap(),
        "--update",
    ];

    assert_success(&planwatch(temp.path(), &args));

    let stored: Value = serde_json::from_str(&fs::read_to_string(&old).unwrap()).unwrap();
    assert_eq!(stored[0]["classroom"], "LAB2");

    let second = planwatch(temp.path(), &args);
    assert_success(&second);
    assert_eq!(stdout(&second), "No changes.\n");
}

#[test]
fn test_compare_missing_old_snapshot() {
    let temp = TempDir::new().unwrap();
    let (_, new) = write_plans(temp.path());

    let output = planwatch(
        temp.path(),
        &["schedule", "compare", "--old", "absent.json", "--new", new.to_str().unwrap()],
    );

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error: [ERR_NOT_FOUND]"), "stderr: {}", err);
    assert!(err.contains("absent.json"));
    // The run id reaches both the JSON log lines and the error
    assert!(err.contains(&format!("\"{}\":", FIELD_REQUEST_ID)));
    assert!(err.contains("(request_id: "));
}

#[test]
fn test_compare_rejects_malformed_snapshot() {
    let temp = TempDir::new().unwrap();
    let (old, _) = write_plans(temp.path());
    let bad = write_json(temp.path(), "bad.json", &json!({"lessons": []}));

    let output = planwatch(
        temp.path(),
        &["schedule", "compare", "--old", old.to_str().unwrap(), "--new", bad.to_str().unwrap()],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ERR_INVALID_SNAPSHOT"));
}

#[test]
fn test_compare_notifies_through_outbox() {
    let temp = TempDir::new().unwrap();
    let (old, new) = write_plans(temp.path());
    let outbox = temp.path().join("outbox");
    let config = temp.path().join("planwatch.toml");
    fs::write(
        &config,
        format!(
            "[general]\nnotification_handler = \"outbox\"\n\n[outbox]\ndir = '{}'\nsubject_prefix = \"[pw] \"\n",
            outbox.display()
        ),
    )
    .unwrap();

    let output = planwatch(
        temp.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "schedule",
            "compare",
            "--old",
            old.to_str().unwrap(),
            "--new",
            new.to_str().unwrap(),
        ],
    );

    assert_success(&output);
    let written = fs::read_to_string(outbox.join("0001-lesson-plan-changed.txt")).unwrap();
    assert!(written.starts_with("Subject: [pw] Lesson plan changed\n"));
    assert!(written.contains("~ MONDAY, lesson 2"));
}

#[test]
fn test_unknown_config_key_fails() {
    let temp = TempDir::new().unwrap();
    let (old, _) = write_plans(temp.path());
    let config = temp.path().join("planwatch.toml");
    fs::write(&config, "[general]\nhandler = \"noop\"\n").unwrap();

    let output = planwatch(
        temp.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "schedule",
            "compare",
            "--old",
            old.to_str().unwrap(),
            "--new",
            old.to_str().unwrap(),
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ERR_INVALID_CONFIG"));
}

fn write_messages(dir: &Path) -> PathBuf {
    write_json(
        dir,
        "messages.json",
        &json!([
            {
                "message_id": "/wiadomosci/1/5/100",
                "sender": "Class Teacher",
                "subject": "School trip",
                "sent_at": "2024-03-01 07:45:00",
                "content": "Bring lunch\nand a raincoat"
            },
            {
                "message_id": "/wiadomosci/1/5/101",
                "sender": "Head Office",
                "subject": "Parents' evening",
                "sent_at": "2024-03-02 12:00:00",
                "content": "Thursday 18:00"
            }
        ]),
    )
}

#[test]
fn test_messages_sync_is_incremental() {
    let temp = TempDir::new().unwrap();
    let input = write_messages(temp.path());
    let db = temp.path().join("inbox.db");
    let args = [
        "messages",
        "sync",
        "--input",
        input.to_str().unwrap(),
        "--db",
        db.to_str().unwrap(),
    ];

    let first = planwatch(temp.path(), &args);
    assert_success(&first);
    assert_eq!(
        stdout(&first),
        "Captured 2 messages: 2 new, 0 already stored, 2 notified\n"
    );

    let second = planwatch(temp.path(), &args);
    assert_success(&second);
    assert_eq!(
        stdout(&second),
        "Captured 2 messages: 0 new, 2 already stored, 0 notified\n"
    );

    let conn = Connection::open(&db).unwrap();
    let pending: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM messages WHERE notified_at IS NULL",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(pending, 0);
}

#[test]
fn test_messages_sync_default_db_location() {
    let temp = TempDir::new().unwrap();
    let input = write_messages(temp.path());

    let output = planwatch(
        temp.path(),
        &["messages", "sync", "--input", input.to_str().unwrap()],
    );

    assert_success(&output);
    assert!(temp.path().join("planwatch.db").exists());
}

#[test]
fn test_messages_sync_writes_html_to_outbox() {
    let temp = TempDir::new().unwrap();
    let input = write_messages(temp.path());
    let outbox = temp.path().join("outbox");
    let config = temp.path().join("planwatch.toml");
    fs::write(
        &config,
        format!(
            "[general]\nnotification_handler = \"outbox\"\n\n[storage]\nmessages_db_path = '{}'\n\n[outbox]\ndir = '{}'\n",
            temp.path().join("from-config.db").display(),
            outbox.display()
        ),
    )
    .unwrap();

    let output = planwatch(
        temp.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "messages",
            "sync",
            "--input",
            input.to_str().unwrap(),
        ],
    );

    assert_success(&output);
    assert!(temp.path().join("from-config.db").exists());

    let first = fs::read_to_string(outbox.join("0001-school-trip.html")).unwrap();
    assert!(first.contains("Content-Type: text/html; charset=utf-8"));
    assert!(first.contains("Bring lunch<br/>and a raincoat"));
    assert!(outbox.join("0002-parents-evening.html").exists());
}

#[test]
fn test_messages_sync_unknown_handler() {
    let temp = TempDir::new().unwrap();
    let input = write_messages(temp.path());
    let config = temp.path().join("planwatch.toml");
    fs::write(&config, "[general]\nnotification_handler = \"smtp\"\n").unwrap();

    let output = planwatch(
        temp.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "messages",
            "sync",
            "--input",
            input.to_str().unwrap(),
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ERR_INVALID_CONFIG"));
    // Nothing stored when the handler cannot be built
    assert!(!temp.path().join("planwatch.db").exists());
}
