mod common;

use common::{demo_tasks, TaskListBuilder};
use taskgraph::dag::TaskGraph;

#[test]
fn graph_indexes_dependencies() {
    let tasks = demo_tasks();
    let graph = TaskGraph::from_tasks(&tasks);

    assert_eq!(graph.len(), 6);
    let one = graph.index_of("1").unwrap();
    let five = graph.index_of("5").unwrap();

    assert!(graph.dependencies_of(one).is_empty());
    assert!(graph.dangling().is_empty());

    let deps: Vec<&str> = graph
        .dependencies_of(five)
        .iter()
        .map(|&i| graph.task(i).id.as_str())
        .collect();
    assert_eq!(deps, vec!["3", "4"]);
}

#[test]
fn graph_records_dangling_references() {
    let tasks = TaskListBuilder::new()
        .with_task("a", &["ghost"])
        .with_task("b", &["a", "phantom"])
        .build();
    let graph = TaskGraph::from_tasks(&tasks);

    assert_eq!(graph.dangling(), &[("a", "ghost"), ("b", "phantom")]);
    // Missing ids take no part in the graph.
    let a = graph.index_of("a").unwrap();
    let b = graph.index_of("b").unwrap();
    assert!(graph.dependencies_of(a).is_empty());
    assert_eq!(graph.dependencies_of(b), &[a]);
}

#[test]
fn graph_collapses_duplicate_ids() {
    let tasks = TaskListBuilder::new()
        .with_titled("x", "first", &[])
        .with_titled("x", "second", &[])
        .build();
    let graph = TaskGraph::from_tasks(&tasks);

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.tasks().next().map(|t| t.title.as_str()), Some("first"));
    assert!(graph.index_of("y").is_none());
    assert!(graph.dependencies_of(42).is_empty());
}

#[test]
fn empty_graph() {
    let graph = TaskGraph::from_tasks(&[]);
    assert!(graph.is_empty());
    assert_eq!(graph.tasks().count(), 0);
}
