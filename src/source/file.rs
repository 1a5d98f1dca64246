// src/source/file.rs

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tracing::debug;

use crate::errors::Result;
use crate::source::parse::{parse_snapshot, SnapshotFormat};
use crate::source::{TaskSnapshot, TaskSource};
use crate::watch::hash::digest_bytes;

/// Reads a saved API response (JSON) or a hand-written TOML task list.
#[derive(Debug, Clone)]
pub struct FileTaskSource {
    path: PathBuf,
    format: SnapshotFormat,
}

impl FileTaskSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = SnapshotFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SnapshotFormat {
        self.format
    }
}

impl TaskSource for FileTaskSource {
    fn fetch(&mut self) -> Pin<Box<dyn Future<Output = Result<TaskSnapshot>> + Send + '_>> {
        Box::pin(async move {
            let bytes = tokio::fs::read(&self.path).await?;
            let digest = digest_bytes(&bytes);
            let tasks = parse_snapshot(&bytes, self.format)?;

            debug!(
                path = ?self.path,
                tasks = tasks.len(),
                digest = %digest,
                "loaded task snapshot"
            );

            Ok(TaskSnapshot { tasks, digest })
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
