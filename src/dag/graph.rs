// src/dag/graph.rs

use std::collections::HashMap;

use tracing::warn;

use crate::types::Task;

/// Internal node structure: resolved deps by index.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Dependencies present in the input, in declaration order.
    deps: Vec<usize>,
}

/// Index over a task slice.
///
/// Node `i` is the `i`-th *distinct* task id in input order; repeated ids
/// keep their first occurrence. Dependency ids that do not name an input
/// task are recorded as dangling and take no part in the graph.
#[derive(Debug, Clone)]
pub struct TaskGraph<'a> {
    tasks: Vec<&'a Task>,
    index: HashMap<&'a str, usize>,
    nodes: Vec<DagNode>,
    dangling: Vec<(&'a str, &'a str)>,
}

impl<'a> TaskGraph<'a> {
    pub fn from_tasks(input: &'a [Task]) -> Self {
        let mut tasks = Vec::with_capacity(input.len());
        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(input.len());

        // First pass: assign indices to distinct ids.
        for task in input {
            if index.contains_key(task.id.as_str()) {
                warn!(task = %task.id, "duplicate task id; keeping the first occurrence");
                continue;
            }
            index.insert(task.id.as_str(), tasks.len());
            tasks.push(task);
        }

        // Second pass: resolve deps, set aside dangling ids.
        let mut nodes = vec![DagNode::default(); tasks.len()];
        let mut dangling = Vec::new();
        for (i, task) in tasks.iter().enumerate() {
            for dep in &task.dependencies {
                match index.get(dep.as_str()) {
                    Some(&d) => nodes[i].deps.push(d),
                    None => dangling.push((task.id.as_str(), dep.as_str())),
                }
            }
        }

        Self {
            tasks,
            index,
            nodes,
            dangling,
        }
    }

    /// Number of distinct tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, idx: usize) -> &'a Task {
        self.tasks[idx]
    }

    /// Distinct tasks in input order.
    pub fn tasks(&self) -> impl Iterator<Item = &'a Task> + '_ {
        self.tasks.iter().copied()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Resolved dependencies of a node (dangling ids removed).
    pub fn dependencies_of(&self, idx: usize) -> &[usize] {
        self.nodes
            .get(idx)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// `(task, missing dependency)` pairs, in input order.
    pub fn dangling(&self) -> &[(&'a str, &'a str)] {
        &self.dangling
    }
}
