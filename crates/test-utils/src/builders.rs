#![allow(dead_code)]

use taskgraph::config::{ConfigFile, LayoutConfig, RawConfigFile, RenderConfig};
use taskgraph::types::{CyclePolicy, Task};

/// Shorthand for a task whose title is `Task <id>`.
pub fn task(id: &str, deps: &[&str]) -> Task {
    Task::new(id, format!("Task {id}")).with_dependencies(deps.iter().copied())
}

/// The six-task pipeline shown in the web panel when no project is loaded.
pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task::new("1", "Setup Project"),
        Task::new("2", "Design Database").with_dependencies(["1"]),
        Task::new("3", "Build API").with_dependencies(["2"]),
        Task::new("4", "Build Frontend").with_dependencies(["2"]),
        Task::new("5", "Integration Tests").with_dependencies(["3", "4"]),
        Task::new("6", "Deploy").with_dependencies(["5"]),
    ]
}

/// Builder for a task list, kept in insertion order.
#[derive(Default)]
pub struct TaskListBuilder {
    tasks: Vec<Task>,
}

impl TaskListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, id: &str, deps: &[&str]) -> Self {
        self.tasks.push(task(id, deps));
        self
    }

    pub fn with_titled(mut self, id: &str, title: &str, deps: &[&str]) -> Self {
        self.tasks
            .push(Task::new(id, title).with_dependencies(deps.iter().copied()));
        self
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                layout: LayoutConfig::default(),
                render: RenderConfig::default(),
            },
        }
    }

    pub fn canvas_height(mut self, h: f64) -> Self {
        self.config.layout.canvas_height = h;
        self
    }

    pub fn node_size(mut self, w: f64, h: f64) -> Self {
        self.config.layout.node_width = w;
        self.config.layout.node_height = h;
        self
    }

    pub fn cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.config.layout.cycle_policy = policy;
        self
    }

    pub fn title_max_chars(mut self, n: usize) -> Self {
        self.config.render.title_max_chars = n;
        self
    }

    pub fn palette(mut self, colors: &[&str]) -> Self {
        self.config.render.palette = colors.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
