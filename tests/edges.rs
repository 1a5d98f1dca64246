mod common;

use common::{demo_tasks, task, TaskListBuilder};
use taskgraph::config::LayoutConfig;
use taskgraph::dag::assign_levels;
use taskgraph::layout::{pack_levels, route_edges};
use taskgraph::types::{Edge, Task};

fn edges_for(tasks: &[Task]) -> Vec<Edge> {
    let cfg = LayoutConfig::default();
    let levels = assign_levels(tasks);
    let packing = pack_levels(tasks, &levels, &cfg);
    route_edges(tasks, &packing.positions, &cfg)
}

#[test]
fn demo_pipeline_edges_connect_box_sides() {
    let edges = edges_for(&demo_tasks());

    let pairs: Vec<(&str, &str)> = edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("1", "2"), ("2", "3"), ("2", "4"), ("3", "5"), ("4", "5"), ("5", "6")]
    );

    let first = &edges[0];
    assert_eq!((first.x1, first.y1, first.x2, first.y2), (200.0, 150.0, 300.0, 150.0));

    let to_four = &edges[2];
    assert_eq!((to_four.x1, to_four.y1), (460.0, 150.0));
    assert_eq!((to_four.x2, to_four.y2), (560.0, 187.0));
}

#[test]
fn edges_point_rightward_for_acyclic_input() {
    for edge in edges_for(&demo_tasks()) {
        assert!(edge.x1 < edge.x2, "edge {} -> {} points left", edge.from, edge.to);
    }
}

#[test]
fn dangling_dependency_emits_no_edge() {
    assert!(edges_for(&[task("x", &["ghost"])]).is_empty());
}

#[test]
fn repeated_dependency_yields_one_edge() {
    let tasks = TaskListBuilder::new()
        .with_task("a", &[])
        .with_task("b", &["a", "a"])
        .build();

    assert_eq!(edges_for(&tasks).len(), 1);
}

#[test]
fn duplicate_task_ids_do_not_add_edges() {
    let tasks = TaskListBuilder::new()
        .with_task("a", &[])
        .with_task("b", &[])
        .with_task("a", &["b"])
        .build();

    assert!(edges_for(&tasks).is_empty());
}

#[test]
fn single_task_has_no_edges() {
    assert!(edges_for(&[task("only", &[])]).is_empty());
}
