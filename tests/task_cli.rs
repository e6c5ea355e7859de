mod support;

use std::fs;

use predicates::str::contains;
use serde_json::Value;
use support::taskdash_cmd;
use tempfile::TempDir;

fn json_output(dir: &TempDir, args: &[&str]) -> Value {
    let output = taskdash_cmd(dir.path())
        .args(args)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("json envelope")
}

#[test]
fn add_persists_across_invocations() {
    let dir = tempfile::tempdir().expect("tempdir");

    let value = json_output(&dir, &["add", "Buy milk"]);
    assert_eq!(value["schema_version"].as_str(), Some("taskdash.v1"));
    assert_eq!(value["command"].as_str(), Some("add"));
    assert_eq!(value["status"].as_str(), Some("success"));
    assert_eq!(value["data"]["task"]["text"].as_str(), Some("Buy milk"));
    assert_eq!(value["data"]["task"]["completed"].as_bool(), Some(false));
    assert_eq!(value["data"]["task"]["id"].as_u64(), Some(2));

    // A fresh invocation reads the same slot: the seed task plus the add.
    let value = json_output(&dir, &["list"]);
    let tasks = value["data"]["tasks"].as_array().expect("tasks array");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["text"].as_str(), Some("Add your first task"));
    assert_eq!(tasks[1]["text"].as_str(), Some("Buy milk"));
}

#[test]
fn add_joins_words_and_trims() {
    let dir = tempfile::tempdir().expect("tempdir");

    let value = json_output(&dir, &["add", " Buy", "milk "]);
    assert_eq!(value["data"]["task"]["text"].as_str(), Some("Buy milk"));
}

#[test]
fn empty_add_is_tolerated() {
    let dir = tempfile::tempdir().expect("tempdir");

    let value = json_output(&dir, &["add", "   "]);
    assert_eq!(value["status"].as_str(), Some("success"));
    assert!(value["data"]["task"].is_null());
    let warnings = value["warnings"].as_array().expect("warnings");
    assert!(warnings
        .iter()
        .any(|w| w.as_str().unwrap_or_default().contains("empty")));

    let value = json_output(&dir, &["list"]);
    assert_eq!(value["data"]["stats"]["total"].as_u64(), Some(1));
}

#[test]
fn toggle_flips_and_reverts() {
    let dir = tempfile::tempdir().expect("tempdir");
    json_output(&dir, &["add", "Write tests"]);

    let value = json_output(&dir, &["toggle", "1"]);
    assert_eq!(value["data"]["task"]["completed"].as_bool(), Some(true));

    let value = json_output(&dir, &["stats"]);
    assert_eq!(value["data"]["completed"].as_u64(), Some(1));
    assert_eq!(value["data"]["completion_rate"].as_u64(), Some(50));

    let value = json_output(&dir, &["toggle", "1"]);
    assert_eq!(value["data"]["task"]["completed"].as_bool(), Some(false));
}

#[test]
fn rm_removes_exactly_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    json_output(&dir, &["add", "Write tests"]);

    let value = json_output(&dir, &["rm", "1"]);
    assert_eq!(
        value["data"]["removed"]["text"].as_str(),
        Some("Add your first task")
    );

    let value = json_output(&dir, &["list"]);
    let tasks = value["data"]["tasks"].as_array().expect("tasks array");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["text"].as_str(), Some("Write tests"));
}

#[test]
fn unknown_ids_are_tolerated() {
    let dir = tempfile::tempdir().expect("tempdir");

    for verb in ["toggle", "rm"] {
        let value = json_output(&dir, &[verb, "999"]);
        assert_eq!(value["status"].as_str(), Some("success"));
        let warnings = value["warnings"].as_array().expect("warnings");
        assert!(warnings
            .iter()
            .any(|w| w.as_str().unwrap_or_default().contains("999")));
    }

    let value = json_output(&dir, &["list"]);
    assert_eq!(value["data"]["stats"]["total"].as_u64(), Some(1));
}

#[test]
fn malformed_slot_falls_back_to_seed() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("tasks.json"), "not json{{").expect("write slot");

    let value = json_output(&dir, &["list"]);
    let tasks = value["data"]["tasks"].as_array().expect("tasks array");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["text"].as_str(), Some("Add your first task"));
}

#[test]
fn end_to_end_scenario() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("tasks.json"),
        r#"[{"id": 1, "text": "Learn React basics", "completed": false}]"#,
    )
    .expect("write slot");

    let value = json_output(&dir, &["add", "Write tests"]);
    assert_eq!(value["data"]["stats"]["total"].as_u64(), Some(2));
    assert_eq!(value["data"]["stats"]["completed"].as_u64(), Some(0));
    assert_eq!(value["data"]["stats"]["completion_rate"].as_u64(), Some(0));

    let value = json_output(&dir, &["toggle", "1"]);
    assert_eq!(value["data"]["stats"]["completed"].as_u64(), Some(1));
    assert_eq!(value["data"]["stats"]["completion_rate"].as_u64(), Some(50));

    let value = json_output(&dir, &["rm", "1"]);
    assert_eq!(value["data"]["stats"]["total"].as_u64(), Some(1));
    assert_eq!(value["data"]["stats"]["completion_rate"].as_u64(), Some(0));

    let value = json_output(&dir, &["list"]);
    let tasks = value["data"]["tasks"].as_array().expect("tasks array");
    assert_eq!(tasks[0]["text"].as_str(), Some("Write tests"));
}

#[test]
fn list_shows_markers_and_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    json_output(&dir, &["add", "Write tests"]);
    json_output(&dir, &["toggle", "2"]);

    taskdash_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("taskdash list: 2 tasks"))
        .stdout(contains("[ ]   1  Add your first task"))
        .stdout(contains("[x]   2  Write tests"));
}

#[test]
fn quiet_suppresses_human_output() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = taskdash_cmd(dir.path())
        .args(["list", "--quiet"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(output.is_empty());
}
