use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Task identifiers are plain strings (`id` or Mongo-style `_id`).
pub type TaskId = String;

/// One task as delivered by the task API.
///
/// Only the fields the dependency panel needs are kept; anything else in the
/// payload (status, assignee, deadline, ...) is ignored during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: TaskId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Ids of the tasks this one waits for.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "depends_on",
        alias = "after"
    )]
    pub dependencies: Vec<TaskId>,
}

/// The task API serializes unset fields as `null`; treat that like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Label to draw: the title, or the id when the title is blank.
    pub fn label(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

/// Top-left corner of a node box, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A connector from the right-center of `from` to the left-center of `to`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: TaskId,
    pub to: TaskId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// What to do when the dependency graph contains a cycle.
///
/// - `Fallback`: lay the graph out anyway; a task revisited on its own
///   traversal path contributes depth 0 (default, matches the web panel).
/// - `Reject`: refuse to lay out cyclic input and report the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    #[default]
    Fallback,
    Reject,
}

impl FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fallback" => Ok(CyclePolicy::Fallback),
            "reject" => Ok(CyclePolicy::Reject),
            other => Err(format!(
                "invalid cycle_policy: {other} (expected \"fallback\" or \"reject\")"
            )),
        }
    }
}

/// Connector stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    #[default]
    Dashed,
    Solid,
}
