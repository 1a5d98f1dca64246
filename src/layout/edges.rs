// src/layout/edges.rs

use std::collections::{BTreeMap, HashSet};

use crate::config::LayoutConfig;
use crate::types::{Edge, Position, Task, TaskId};

/// Connector endpoints for every `(dependency, dependent)` pair that has a
/// position on both ends.
///
/// Pairs whose dependency id was never placed (dangling references) are
/// skipped, and a pair repeated in a dependency list yields one edge.
pub fn route_edges(
    tasks: &[Task],
    positions: &BTreeMap<TaskId, Position>,
    cfg: &LayoutConfig,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut visited: HashSet<&str> = HashSet::with_capacity(tasks.len());
    let half_height = cfg.node_height / 2.0;

    for task in tasks {
        // Later duplicates of an id do not contribute edges.
        if !visited.insert(task.id.as_str()) {
            continue;
        }
        let Some(to) = positions.get(&task.id) else {
            continue;
        };

        for dep in &task.dependencies {
            let Some(from) = positions.get(dep) else {
                continue;
            };
            if !seen.insert((dep.as_str(), task.id.as_str())) {
                continue;
            }

            edges.push(Edge {
                from: dep.clone(),
                to: task.id.clone(),
                x1: from.x + cfg.node_width,
                y1: from.y + half_height,
                x2: to.x,
                y2: to.y + half_height,
            });
        }
    }

    edges
}
