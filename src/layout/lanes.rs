// src/layout/lanes.rs

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::dag::LevelMap;
use crate::types::{Position, Task, TaskId};

/// Node positions plus the canvas size needed to show them all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Packing {
    pub positions: BTreeMap<TaskId, Position>,
    pub width: f64,
    pub height: f64,
}

/// Group tasks by level, one column per level, input order inside a column.
///
/// Tasks missing from `levels` are placed in column 0.
pub fn group_by_level<'a>(tasks: &'a [Task], levels: &LevelMap) -> BTreeMap<usize, Vec<&'a Task>> {
    let mut groups: BTreeMap<usize, Vec<&'a Task>> = BTreeMap::new();
    let mut seen: HashSet<&str> = HashSet::with_capacity(tasks.len());

    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            continue;
        }
        let level = levels.get(&task.id).copied().unwrap_or(0);
        groups.entry(level).or_default().push(task);
    }

    groups
}

/// Place every task on the canvas.
///
/// Each level group is centered vertically in `canvas_height`; a group taller
/// than the canvas starts at `top_margin` and the canvas grows to fit it.
pub fn pack_levels(tasks: &[Task], levels: &LevelMap, cfg: &LayoutConfig) -> Packing {
    let groups = group_by_level(tasks, levels);
    let max_level = groups.keys().next_back().copied().unwrap_or(0);

    let mut positions = BTreeMap::new();
    let mut lowest_bottom = f64::NEG_INFINITY;

    for (&level, group) in &groups {
        let n = group.len() as f64;
        let total_height = n * cfg.node_height + (n - 1.0) * cfg.node_gap;
        let start_y = ((cfg.canvas_height - total_height) / 2.0).max(cfg.top_margin);
        let x = cfg.left_margin + level as f64 * cfg.column_pitch();

        for (i, task) in group.iter().enumerate() {
            let y = start_y + i as f64 * cfg.row_pitch();
            lowest_bottom = lowest_bottom.max(y + cfg.node_height + cfg.bottom_margin);
            positions.insert(task.id.clone(), Position { x, y });
        }
    }

    let width = cfg.left_margin + (max_level + 1) as f64 * cfg.column_pitch();
    let height = cfg.canvas_height.max(lowest_bottom);

    Packing {
        positions,
        width,
        height,
    }
}
