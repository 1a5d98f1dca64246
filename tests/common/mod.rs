#![allow(dead_code)]

pub use taskgraph_test_utils::builders::{demo_tasks, task, ConfigFileBuilder, TaskListBuilder};
pub use taskgraph_test_utils::init_tracing;

use std::error::Error;

pub type TestResult = Result<(), Box<dyn Error>>;
