// src/dag/mod.rs

//! Task dependency graph analysis.
//!
//! - [`graph`] indexes a task slice: resolved dependencies and
//!   dangling references.
//! - [`levels`] assigns each task its longest-path depth.
//! - [`cycles`] reports (or rejects) dependency cycles.

pub mod cycles;
pub mod graph;
pub mod levels;

pub use cycles::{ensure_acyclic, find_cycles};
pub use graph::TaskGraph;
pub use levels::{assign_levels, LevelMap};
