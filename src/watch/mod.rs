// src/watch/mod.rs

//! Snapshot change detection.
//!
//! - [`watcher`] wires up a filesystem watcher (`notify`) on the snapshot
//!   file and turns changes into runtime events.
//! - [`hash`] computes blake3 digests so unchanged content is not laid out
//!   again.

pub mod hash;
pub mod watcher;

pub use hash::{digest_bytes, digest_tasks};
pub use watcher::{spawn_watcher, WatcherHandle};
