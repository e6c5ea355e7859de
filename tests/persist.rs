use std::fs;

use taskdash::persist;
use taskdash::store::{Task, TaskStore};

const SEED: &str = "Add your first task";

fn task(id: u64, text: &str, completed: bool) -> Task {
    Task {
        id,
        text: text.to_string(),
        completed,
    }
}

#[test]
fn round_trip_preserves_tasks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = TaskStore::seed("Learn React basics");
    store.add("Write tests");
    store.add("Ship it");
    store.toggle(1);

    persist::save(dir.path(), store.tasks()).expect("save");
    let loaded = persist::load_or_seed(dir.path(), SEED);

    assert_eq!(loaded.tasks(), store.tasks());
}

#[test]
fn missing_slot_falls_back_to_seed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = persist::load_or_seed(dir.path(), SEED);

    assert_eq!(store.len(), 1);
    let seed = &store.tasks()[0];
    assert_eq!(seed.id, 1);
    assert_eq!(seed.text, SEED);
    assert!(!seed.completed);
}

#[test]
fn malformed_slot_falls_back_to_seed() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(persist::slot_path(dir.path()), "not json{{").expect("write slot");

    let store = persist::load_or_seed(dir.path(), SEED);
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].text, SEED);
}

#[test]
fn shape_mismatch_falls_back_to_seed() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(persist::slot_path(dir.path()), r#"{"tasks": []}"#).expect("write slot");

    let store = persist::load_or_seed(dir.path(), SEED);
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].text, SEED);
}

#[test]
fn empty_array_slot_loads_an_empty_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(persist::slot_path(dir.path()), "[]").expect("write slot");

    let store = persist::load_or_seed(dir.path(), SEED);
    assert!(store.is_empty());
}

#[test]
fn load_resumes_the_id_counter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let tasks = vec![task(2, "two", false), task(5, "five", true)];
    persist::save(dir.path(), &tasks).expect("save");

    let mut store = persist::load_or_seed(dir.path(), SEED);
    let added = store.add("six").expect("task added");
    assert_eq!(added.id, 6);
}

#[test]
fn save_creates_the_data_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("deep").join("data");
    let tasks = vec![task(1, "one", false)];

    persist::save(&nested, &tasks).expect("save");
    assert!(persist::slot_path(&nested).exists());

    let loaded = persist::load_or_seed(&nested, SEED);
    assert_eq!(loaded.tasks(), tasks.as_slice());
}

#[test]
fn save_overwrites_the_previous_slot() {
    let dir = tempfile::tempdir().expect("tempdir");
    persist::save(dir.path(), &[task(1, "one", false)]).expect("save");
    persist::save(dir.path(), &[task(1, "one", true), task(2, "two", false)]).expect("save");

    let loaded = persist::load_or_seed(dir.path(), SEED);
    assert_eq!(loaded.len(), 2);
    assert!(loaded.tasks()[0].completed);
}

#[test]
fn save_best_effort_reports_failure_without_panicking() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A file where the data directory should be makes the write fail.
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "in the way").expect("write blocker");

    let warning = persist::save_best_effort(&blocked, &[task(1, "one", false)]);
    assert!(warning.is_some());
}
