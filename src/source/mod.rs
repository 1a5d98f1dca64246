// src/source/mod.rs

//! Where task lists come from.
//!
//! The layout core never does I/O; a [`TaskSource`] resolves to a
//! [`TaskSnapshot`] first, and only then is the layout computed.

pub mod file;
pub mod parse;

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::Task;

pub use file::FileTaskSource;
pub use parse::{parse_json, parse_snapshot, parse_toml, SnapshotFormat};

/// One fetched task list plus the blake3 digest of the bytes it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSnapshot {
    pub tasks: Vec<Task>,
    pub digest: String,
}

/// Abstraction over task providers so the engine can be tested with an
/// in-memory source.
pub trait TaskSource: Send {
    /// Fetch the current task list.
    fn fetch(&mut self) -> Pin<Box<dyn Future<Output = Result<TaskSnapshot>> + Send + '_>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}
