mod common;

use std::io::Write;

use common::TestResult;
use taskgraph::errors::TaskGraphError;
use taskgraph::source::{parse_json, parse_toml, FileTaskSource, SnapshotFormat, TaskSource};
use taskgraph::types::Task;
use taskgraph::watch::digest_bytes;

#[test]
fn json_array_with_mongo_ids_and_extra_fields() -> TestResult {
    let tasks = parse_json(
        br#"[
            {"_id": "64a1", "title": "Setup Project", "status": "completed", "progress": 100},
            {"_id": "64a2", "title": "Design Database", "dependencies": ["64a1"], "priority": "high"}
        ]"#,
    )?;

    assert_eq!(
        tasks,
        vec![
            Task::new("64a1", "Setup Project"),
            Task::new("64a2", "Design Database").with_dependencies(["64a1"]),
        ]
    );
    Ok(())
}

#[test]
fn json_project_wrapper_yields_its_tasks() -> TestResult {
    let tasks = parse_json(
        br#"{
            "_id": "p1",
            "name": "Website Relaunch",
            "risk_score": 0.42,
            "tasks": [
                {"id": "a", "title": "Plan"},
                {"id": "b", "title": "Build", "depends_on": ["a"]}
            ]
        }"#,
    )?;

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].dependencies, vec!["a"]);
    Ok(())
}

#[test]
fn json_without_id_is_an_error() {
    let result = parse_json(br#"[{"title": "orphan"}]"#);
    assert!(matches!(result, Err(TaskGraphError::JsonError(_))));
}

#[test]
fn json_null_fields_read_as_empty() -> TestResult {
    let tasks = parse_json(
        br#"[
            {"_id": "1", "title": "Setup Project", "dependencies": null},
            {"_id": "2", "title": null, "dependencies": ["1"]}
        ]"#,
    )?;

    assert_eq!(
        tasks,
        vec![
            Task::new("1", "Setup Project"),
            Task::new("2", "").with_dependencies(["1"]),
        ]
    );
    assert_eq!(tasks[1].label(), "2");
    Ok(())
}

#[test]
fn json_errors_point_at_the_offending_field() {
    let err = parse_json(br#"[{"_id": "1", "dependencies": 5}]"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invalid type"), "{msg}");
    assert!(msg.contains("line 1"), "{msg}");

    let err = parse_json(br#"  {"name": "Website"}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `tasks`"), "{err}");
}

#[test]
fn toml_task_tables_keep_order() -> TestResult {
    let tasks = parse_toml(
        r#"
[[task]]
id = "z"
title = "Last alphabetically"

[[task]]
id = "a"
title = "First alphabetically"
after = ["z"]
"#,
    )?;

    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a"]);
    assert_eq!(tasks[1].dependencies, vec!["z"]);
    Ok(())
}

#[test]
fn format_is_chosen_by_extension() {
    use std::path::Path;

    assert_eq!(SnapshotFormat::from_path(Path::new("tasks.toml")), SnapshotFormat::Toml);
    assert_eq!(SnapshotFormat::from_path(Path::new("tasks.TOML")), SnapshotFormat::Toml);
    assert_eq!(SnapshotFormat::from_path(Path::new("tasks.json")), SnapshotFormat::Json);
    assert_eq!(SnapshotFormat::from_path(Path::new("response")), SnapshotFormat::Json);
}

#[tokio::test]
async fn file_source_reads_and_digests_snapshot() -> TestResult {
    let contents = r#"[{"id": "1", "title": "Setup"}, {"id": "2", "dependencies": ["1"]}]"#;
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    write!(file, "{contents}")?;

    let mut source = FileTaskSource::new(file.path());
    let snapshot = source.fetch().await?;

    assert_eq!(snapshot.tasks.len(), 2);
    assert_eq!(snapshot.tasks[1].label(), "2");
    assert_eq!(snapshot.digest, digest_bytes(contents.as_bytes()));
    Ok(())
}

#[tokio::test]
async fn file_source_reads_toml() -> TestResult {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    write!(file, "[[task]]\nid = \"only\"\n")?;

    let mut source = FileTaskSource::new(file.path());
    assert_eq!(source.format(), SnapshotFormat::Toml);

    let snapshot = source.fetch().await?;
    assert_eq!(snapshot.tasks, vec![Task::new("only", "")]);
    Ok(())
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = FileTaskSource::new(dir.path().join("gone.json"));

    assert!(matches!(source.fetch().await, Err(TaskGraphError::IoError(_))));
}
