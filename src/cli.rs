// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::render::OutputFormat;

/// Command-line arguments for `taskgraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskgraph",
    version,
    about = "Lay out a task dependency graph left-to-right and render it as SVG or JSON.",
    long_about = None
)]
pub struct CliArgs {
    /// Task snapshot to lay out (`.json` API response or `.toml` task list).
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the config file (TOML).
    ///
    /// Default: `TaskGraph.toml` in the current working directory if it
    /// exists, built-in defaults otherwise.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the rendered document here instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Refuse to lay out graphs with dependency cycles.
    #[arg(long)]
    pub strict: bool,

    /// Keep running and re-render whenever the snapshot file changes.
    #[arg(long)]
    pub watch: bool,

    /// Print levels and cycle diagnostics, but don't render anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
