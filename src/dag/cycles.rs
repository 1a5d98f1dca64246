// src/dag/cycles.rs

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::TaskGraph;
use crate::errors::{Result, TaskGraphError};
use crate::types::{Task, TaskId};

/// Build a petgraph graph over resolvable edges.
///
/// Edge direction: dep -> task. For `B.dependencies = ["A"]` we add A -> B.
fn to_graphmap(graph: &TaskGraph<'_>) -> DiGraphMap<usize, ()> {
    let mut g: DiGraphMap<usize, ()> = DiGraphMap::new();

    for i in 0..graph.len() {
        g.add_node(i);
    }

    for i in 0..graph.len() {
        for &dep in graph.dependencies_of(i) {
            g.add_edge(dep, i, ());
        }
    }

    g
}

/// Tasks that sit on a dependency cycle, in input order.
///
/// A task is cyclic when its strongly connected component has more than one
/// member, or when it depends on itself.
pub fn find_cycles(tasks: &[Task]) -> Vec<TaskId> {
    let graph = TaskGraph::from_tasks(tasks);
    cyclic_indices(&graph)
        .into_iter()
        .map(|i| graph.task(i).id.clone())
        .collect()
}

pub(crate) fn cyclic_indices(graph: &TaskGraph<'_>) -> Vec<usize> {
    let g = to_graphmap(graph);

    let mut cyclic: Vec<usize> = tarjan_scc(&g)
        .into_iter()
        .filter(|scc| scc.len() > 1 || g.contains_edge(scc[0], scc[0]))
        .flatten()
        .collect();

    cyclic.sort_unstable();
    cyclic
}

/// Fail with [`TaskGraphError::DagCycle`] if the task graph has a cycle.
///
/// Dangling dependencies are ignored, matching the layout.
pub fn ensure_acyclic(tasks: &[Task]) -> Result<()> {
    let graph = TaskGraph::from_tasks(tasks);
    check_acyclic(&graph)
}

pub(crate) fn check_acyclic(graph: &TaskGraph<'_>) -> Result<()> {
    let g = to_graphmap(graph);

    // A topological sort will fail if there is a cycle.
    match toposort(&g, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = graph.task(cycle.node_id());
            Err(TaskGraphError::DagCycle(format!(
                "cycle detected in task graph involving task '{}'",
                node.id
            )))
        }
    }
}
