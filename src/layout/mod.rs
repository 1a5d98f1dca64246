// src/layout/mod.rs

//! Left-to-right layout of a task dependency graph.
//!
//! [`compute_layout`] runs the whole pipeline:
//! 1. level assignment ([`crate::dag::levels`]),
//! 2. lane packing ([`lanes`]),
//! 3. edge routing ([`edges`]).
//!
//! Everything here is a pure function of the task slice and the
//! [`LayoutConfig`]; nothing is cached between calls.

pub mod edges;
pub mod lanes;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::dag::cycles::{check_acyclic, cyclic_indices};
use crate::dag::graph::TaskGraph;
use crate::dag::levels::{levels_by_index, LevelMap};
use crate::errors::Result;
use crate::types::{CyclePolicy, Edge, Position, Task, TaskId};

pub use edges::route_edges;
pub use lanes::{group_by_level, pack_levels, Packing};

/// A task as placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    pub id: TaskId,
    pub title: String,
    pub level: usize,
    pub position: Position,
}

/// Result of laying out one task snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// Distinct tasks in input order.
    pub nodes: Vec<PlacedNode>,
    pub levels: LevelMap,
    pub positions: BTreeMap<TaskId, Position>,
    pub edges: Vec<Edge>,
    pub width: f64,
    pub height: f64,
    /// Tasks on a dependency cycle; their levels come from the cycle
    /// fallback and need not respect dependency order.
    pub cyclic: Vec<TaskId>,
}

impl Layout {
    pub fn level_of(&self, id: &str) -> Option<usize> {
        self.levels.get(id).copied()
    }

    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.positions.get(id).copied()
    }

    pub fn max_level(&self) -> usize {
        self.levels.values().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Lay out `tasks` according to `cfg`.
///
/// With [`CyclePolicy::Reject`] a cyclic graph yields
/// [`crate::errors::TaskGraphError::DagCycle`]; with the default fallback the
/// layout is produced anyway and the affected ids are listed in
/// [`Layout::cyclic`]. Dangling dependencies never fail.
pub fn compute_layout(tasks: &[Task], cfg: &LayoutConfig) -> Result<Layout> {
    let graph = TaskGraph::from_tasks(tasks);

    for (task, dep) in graph.dangling() {
        debug!(task = %task, dependency = %dep, "ignoring dependency on unknown task");
    }

    let cyclic = match cfg.cycle_policy {
        CyclePolicy::Reject => {
            check_acyclic(&graph)?;
            Vec::new()
        }
        CyclePolicy::Fallback => {
            let ids: Vec<TaskId> = cyclic_indices(&graph)
                .into_iter()
                .map(|i| graph.task(i).id.clone())
                .collect();
            if !ids.is_empty() {
                warn!(tasks = ?ids, "dependency cycle found; levels inside it are approximate");
            }
            ids
        }
    };

    let levels: LevelMap = levels_by_index(&graph)
        .into_iter()
        .enumerate()
        .map(|(i, level)| (graph.task(i).id.clone(), level))
        .collect();

    let packing = pack_levels(tasks, &levels, cfg);
    let edges = route_edges(tasks, &packing.positions, cfg);

    let nodes: Vec<PlacedNode> = graph
        .tasks()
        .filter_map(|task| {
            let level = *levels.get(&task.id)?;
            let position = *packing.positions.get(&task.id)?;
            Some(PlacedNode {
                id: task.id.clone(),
                title: task.label().to_string(),
                level,
                position,
            })
        })
        .collect();

    debug!(
        tasks = nodes.len(),
        edges = edges.len(),
        width = packing.width,
        height = packing.height,
        "computed task graph layout"
    );

    Ok(Layout {
        nodes,
        levels,
        positions: packing.positions,
        edges,
        width: packing.width,
        height: packing.height,
        cyclic,
    })
}
