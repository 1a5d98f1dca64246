use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use taskgraph::engine::OutputSink;
use taskgraph::errors::{Result, TaskGraphError};
use taskgraph::source::{TaskSnapshot, TaskSource};
use taskgraph::types::Task;
use taskgraph::watch::digest_tasks;

/// An in-memory task source.
///
/// Tests swap the task list through the shared handle between fetches to
/// simulate the backend returning new data. `fetches` counts calls.
pub struct StaticTaskSource {
    tasks: Arc<Mutex<Option<Vec<Task>>>>,
    fetches: Arc<Mutex<usize>>,
}

impl StaticTaskSource {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(Some(tasks))),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    /// Shared handle to the served tasks; `None` makes the next fetch fail.
    pub fn handle(&self) -> Arc<Mutex<Option<Vec<Task>>>> {
        Arc::clone(&self.tasks)
    }

    pub fn fetch_counter(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.fetches)
    }
}

impl TaskSource for StaticTaskSource {
    fn fetch(&mut self) -> Pin<Box<dyn Future<Output = Result<TaskSnapshot>> + Send + '_>> {
        let tasks = Arc::clone(&self.tasks);
        let fetches = Arc::clone(&self.fetches);

        Box::pin(async move {
            *fetches.lock().unwrap() += 1;
            let current = tasks.lock().unwrap().clone();
            match current {
                Some(tasks) => {
                    let digest = digest_tasks(&tasks);
                    Ok(TaskSnapshot { tasks, digest })
                }
                None => Err(TaskGraphError::Other(anyhow::anyhow!(
                    "static source has no tasks"
                ))),
            }
        })
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Output sink that records every written document.
#[derive(Clone, Default)]
pub struct MemorySink {
    documents: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().unwrap().clone()
    }
}

impl OutputSink for MemorySink {
    fn write_document(&mut self, document: &str) -> Result<()> {
        self.documents.lock().unwrap().push(document.to_string());
        Ok(())
    }
}

/// Output sink whose first `failures` writes return an IO error.
///
/// Successful writes are recorded like [`MemorySink`].
#[derive(Clone, Default)]
pub struct FailingSink {
    remaining_failures: Arc<Mutex<usize>>,
    attempts: Arc<Mutex<usize>>,
    documents: Arc<Mutex<Vec<String>>>,
}

impl FailingSink {
    pub fn new(failures: usize) -> Self {
        Self {
            remaining_failures: Arc::new(Mutex::new(failures)),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().unwrap().clone()
    }
}

impl OutputSink for FailingSink {
    fn write_document(&mut self, document: &str) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;

        let mut remaining = self.remaining_failures.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(TaskGraphError::IoError(std::io::Error::other(
                "simulated write failure",
            )));
        }

        self.documents.lock().unwrap().push(document.to_string());
        Ok(())
    }
}
