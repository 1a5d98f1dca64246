// src/source/parse.rs

//! Decoding task snapshots.
//!
//! JSON accepts the two shapes the task API returns:
//!
//! ```json
//! [{"_id": "1", "title": "Setup Project", "dependencies": []}]
//! ```
//!
//! ```json
//! {"_id": "p1", "name": "Website", "tasks": [{"id": "1", "title": "Setup Project"}]}
//! ```
//!
//! TOML uses an array of tables so task order is kept:
//!
//! ```toml
//! [[task]]
//! id = "2"
//! title = "Design Database"
//! dependencies = ["1"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::errors::Result;
use crate::types::Task;

/// Encoding of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    /// `.toml` files are TOML; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SnapshotFormat::Toml,
            _ => SnapshotFormat::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProjectPayload {
    tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct TomlPayload {
    #[serde(default)]
    task: Vec<Task>,
}

/// Decode a task list or a project object carrying `tasks`.
///
/// The shape is picked from the first non-whitespace byte so serde_json
/// reports errors against the field that broke, with line and column.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<Task>> {
    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => {
            let project: ProjectPayload = serde_json::from_slice(bytes)?;
            Ok(project.tasks)
        }
        _ => Ok(serde_json::from_slice(bytes)?),
    }
}

pub fn parse_toml(text: &str) -> Result<Vec<Task>> {
    let payload: TomlPayload = toml::from_str(text)?;
    Ok(payload.task)
}

/// Decode `bytes` according to `format`.
pub fn parse_snapshot(bytes: &[u8], format: SnapshotFormat) -> Result<Vec<Task>> {
    match format {
        SnapshotFormat::Json => parse_json(bytes),
        SnapshotFormat::Toml => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| anyhow::anyhow!("snapshot is not valid UTF-8: {e}"))?;
            parse_toml(text)
        }
    }
}
