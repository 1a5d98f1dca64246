// src/dag/levels.rs

//! Longest-path level assignment.
//!
//! `level(t) = 0` when `t` has no resolvable dependency, otherwise
//! `1 + max(level(d))` over its dependencies. A dependency found on the
//! current traversal path (a cycle) contributes 0 for that occurrence and is
//! not memoized, so cyclic input still terminates.

use std::collections::BTreeMap;

use tracing::trace;

use crate::dag::graph::TaskGraph;
use crate::types::{Task, TaskId};

pub type LevelMap = BTreeMap<TaskId, usize>;

/// Assign a level to every distinct task id in `tasks`.
///
/// Dangling dependency ids never appear in the result.
pub fn assign_levels(tasks: &[Task]) -> LevelMap {
    let graph = TaskGraph::from_tasks(tasks);
    levels_by_index(&graph)
        .into_iter()
        .enumerate()
        .map(|(i, level)| (graph.task(i).id.clone(), level))
        .collect()
}

/// One pending node on the explicit DFS stack.
#[derive(Debug)]
struct Frame {
    node: usize,
    /// Position of the next dependency to look at.
    next: usize,
    /// Deepest dependency level seen so far.
    deepest: Option<usize>,
}

impl Frame {
    fn new(node: usize) -> Self {
        Self {
            node,
            next: 0,
            deepest: None,
        }
    }

    fn absorb(&mut self, level: usize) {
        self.deepest = Some(self.deepest.map_or(level, |d| d.max(level)));
    }
}

/// Levels indexed like `graph`'s nodes.
///
/// Walks roots in input order and dependencies in declaration order, so the
/// result (including the cycle fallback) only depends on input order.
pub(crate) fn levels_by_index(graph: &TaskGraph<'_>) -> Vec<usize> {
    let n = graph.len();
    let mut memo: Vec<Option<usize>> = vec![None; n];
    let mut on_path = vec![false; n];
    let mut stack: Vec<Frame> = Vec::new();

    for start in 0..n {
        if memo[start].is_some() {
            continue;
        }
        on_path[start] = true;
        stack.push(Frame::new(start));

        while let Some(top) = stack.last_mut() {
            let deps = graph.dependencies_of(top.node);

            if let Some(&dep) = deps.get(top.next) {
                top.next += 1;
                if let Some(level) = memo[dep] {
                    top.absorb(level);
                } else if on_path[dep] {
                    trace!(
                        task = %graph.task(top.node).id,
                        dependency = %graph.task(dep).id,
                        "dependency is on the current path; counting it as level 0"
                    );
                    top.absorb(0);
                } else {
                    on_path[dep] = true;
                    stack.push(Frame::new(dep));
                }
                continue;
            }

            let node = top.node;
            let level = top.deepest.map_or(0, |d| d + 1);
            memo[node] = Some(level);
            on_path[node] = false;
            stack.pop();

            if let Some(parent) = stack.last_mut() {
                parent.absorb(level);
            }
        }
    }

    memo.into_iter().map(|level| level.unwrap_or(0)).collect()
}
