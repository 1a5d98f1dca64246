// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod layout;
pub mod logging;
pub mod render;
pub mod source;
pub mod types;
pub mod watch;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::engine::{LayoutCore, Output, Runtime, RuntimeEvent, TriggerReason};
use crate::source::{FileTaskSource, TaskSource};
use crate::types::{CyclePolicy, Task};

pub use crate::dag::{assign_levels, ensure_acyclic, find_cycles};
pub use crate::layout::{compute_layout, pack_levels, route_edges, Layout};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the task source and output sink
/// - the layout core and runtime loop
/// - (optional) file watcher and Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = config::resolve(args.config.as_deref())?;
    if args.strict {
        cfg = cfg.with_cycle_policy(CyclePolicy::Reject);
    }

    let mut source = FileTaskSource::new(&args.input);

    if args.dry_run {
        let snapshot = source.fetch().await?;
        let layout = compute_layout(&snapshot.tasks, cfg.layout())?;
        print_dry_run(&snapshot.tasks, &layout);
        return Ok(());
    }

    let output = Output::from_option(args.output.clone());
    let core = LayoutCore::new(cfg, args.format);
    let mut runtime = Runtime::new(core, source, output);

    if !args.watch {
        runtime.render_once().await?;
        return Ok(());
    }

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    let _watcher_handle = watch::spawn_watcher(&args.input, rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    info!(input = ?args.input, "rendering initial snapshot");
    rt_tx
        .send(RuntimeEvent::SnapshotChanged {
            reason: TriggerReason::Initial,
        })
        .await?;

    runtime.run(rt_rx).await?;
    Ok(())
}

/// Dry-run output: tasks per level, dangling references and cycles.
fn print_dry_run(tasks: &[Task], layout: &Layout) {
    println!("taskgraph dry-run");
    println!("  tasks = {}", layout.nodes.len());
    println!("  edges = {}", layout.edges.len());
    println!("  canvas = {} x {}", layout.width, layout.height);
    println!();

    let groups = crate::layout::group_by_level(tasks, &layout.levels);
    for (level, group) in &groups {
        println!("level {level}:");
        for task in group {
            println!("  - {} ({})", task.id, task.label());
            let known: Vec<&str> = task
                .dependencies
                .iter()
                .filter(|d| layout.levels.contains_key(d.as_str()))
                .map(String::as_str)
                .collect();
            if !known.is_empty() {
                println!("      after: {:?}", known);
            }
            let missing: Vec<&str> = task
                .dependencies
                .iter()
                .filter(|d| !layout.levels.contains_key(d.as_str()))
                .map(String::as_str)
                .collect();
            if !missing.is_empty() {
                println!("      unknown dependencies: {:?}", missing);
            }
        }
    }

    if !layout.cyclic.is_empty() {
        println!();
        println!("cyclic tasks: {:?}", layout.cyclic);
    }

    debug!("dry-run complete (nothing rendered)");
}

