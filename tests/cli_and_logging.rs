use std::path::PathBuf;

use clap::Parser;
use taskgraph::cli::{CliArgs, LogLevel};
use taskgraph::logging::resolve_level;
use taskgraph::render::OutputFormat;
use tracing::Level;

#[test]
fn minimal_invocation_uses_defaults() {
    let args = CliArgs::try_parse_from(["taskgraph", "--input", "tasks.json"]).unwrap();

    assert_eq!(args.input, PathBuf::from("tasks.json"));
    assert_eq!(args.format, OutputFormat::Svg);
    assert!(args.config.is_none());
    assert!(args.output.is_none());
    assert!(!args.strict && !args.watch && !args.dry_run);
}

#[test]
fn all_flags_parse() {
    let args = CliArgs::try_parse_from([
        "taskgraph",
        "--input",
        "project.toml",
        "--config",
        "TaskGraph.toml",
        "--output",
        "out/graph.json",
        "--format",
        "json",
        "--strict",
        "--watch",
        "--log-level",
        "debug",
    ])
    .unwrap();

    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from("out/graph.json")));
    assert!(args.strict && args.watch);
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
}

#[test]
fn input_is_required() {
    assert!(CliArgs::try_parse_from(["taskgraph"]).is_err());
}

#[test]
fn log_level_priority() {
    assert_eq!(resolve_level(Some(LogLevel::Warn), Some("trace")), Level::WARN);
    assert_eq!(resolve_level(None, Some(" Debug ")), Level::DEBUG);
    assert_eq!(resolve_level(None, Some("warning")), Level::WARN);
    assert_eq!(resolve_level(None, Some("loud")), Level::INFO);
    assert_eq!(resolve_level(None, None), Level::INFO);
}
