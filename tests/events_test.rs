use std::fs;

use chrono::{DateTime, Utc};
use serde_json::Value;
use termtask::events::{JsonlEvents, TodoEvents};
use termtask::model::Todo;

fn sample(id: u64, title: &str) -> Todo {
    Todo::new(id, title, false, Some("work"), "medium", Utc::now()).unwrap()
}

fn read_records(path: &std::path::Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_created_event_record_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let sink = JsonlEvents::new(&path);

    sink.task_created(&sample(1, "Buy milk")).unwrap();

    let records = read_records(&path);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["event_type"], "task.created");
    assert_eq!(record["task_id"], 1);
    assert_eq!(record["data"]["title"], "Buy milk");

    // Timestamp must be RFC 3339
    let stamp = record["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
}

#[test]
fn test_updated_event_carries_only_changed_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let sink = JsonlEvents::new(&path);

    let before = sample(2, "Old title");
    let mut after = before.clone();
    after.title = "New title".to_string();
    after.priority = "high".parse().unwrap();

    sink.task_updated(&before, &after).unwrap();

    let records = read_records(&path);
    let changes = &records[0]["data"]["changes"];
    assert_eq!(changes["title"], "New title");
    assert_eq!(changes["priority"], "high");
    assert!(changes.get("category").is_none());
    assert!(changes.get("completed").is_none());
}

#[test]
fn test_completion_toggle_shows_up_in_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let sink = JsonlEvents::new(&path);

    let before = sample(3, "Toggle me");
    let mut after = before.clone();
    after.completed = true;

    sink.task_updated(&before, &after).unwrap();

    let records = read_records(&path);
    assert_eq!(records[0]["task_id"], 3);
    assert_eq!(records[0]["data"]["changes"]["completed"], true);
}

#[test]
fn test_cleared_category_recorded_as_null() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let sink = JsonlEvents::new(&path);

    let before = sample(4, "t");
    let mut after = before.clone();
    after.category = None;

    sink.task_updated(&before, &after).unwrap();

    let records = read_records(&path);
    let changes = &records[0]["data"]["changes"];
    assert_eq!(changes["category"], Value::Null);
}

#[test]
fn test_deleted_event_has_empty_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let sink = JsonlEvents::new(&path);

    sink.task_deleted(5).unwrap();

    let records = read_records(&path);
    assert_eq!(records[0]["event_type"], "task.deleted");
    assert_eq!(records[0]["task_id"], 5);
    assert_eq!(records[0]["data"], serde_json::json!({}));
}

#[test]
fn test_events_append_one_line_each() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let sink = JsonlEvents::new(&path);

    let todo = sample(6, "busy");
    sink.task_created(&todo).unwrap();
    sink.task_updated(&todo, &todo).unwrap();
    sink.task_deleted(todo.id).unwrap();

    let records = read_records(&path);
    let types: Vec<&str> = records
        .iter()
        .map(|r| r["event_type"].as_str().unwrap())
        .collect();
    assert_eq!(types, ["task.created", "task.updated", "task.deleted"]);
}

#[test]
fn test_sink_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("events.jsonl");
    let sink = JsonlEvents::new(&path);

    sink.task_deleted(1).unwrap();

    assert!(path.exists());
    assert_eq!(sink.path(), path.as_path());
}
