// src/engine/mod.rs

//! Render engine for taskgraph.
//!
//! This module ties together:
//! - the pure layout-and-render core (skips unchanged snapshots)
//! - the output sink (stdout or a file)
//! - the runtime event loop that reacts to:
//!   - snapshot change notifications from the watcher
//!   - shutdown signals

pub mod core;
pub mod output;
pub mod runtime;

pub use self::core::{LayoutCore, Rendered};
pub use output::{Output, OutputSink};
pub use runtime::Runtime;

/// Why a re-render was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerReason {
    /// First render at startup.
    Initial,
    /// The snapshot file changed on disk.
    FileWatch,
}

/// Events consumed by the [`Runtime`] loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    SnapshotChanged { reason: TriggerReason },
    ShutdownRequested,
}
