// src/watch/watcher.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::{RuntimeEvent, TriggerReason};

/// Handle for the filesystem watcher.
///
/// Dropping this handle stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the directory containing `snapshot` and send
/// `RuntimeEvent::SnapshotChanged` whenever the snapshot file is created or
/// modified.
///
/// The parent directory is watched instead of the file itself so editors
/// that save by rename-and-replace keep being noticed.
pub fn spawn_watcher(
    snapshot: impl Into<PathBuf>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let snapshot = snapshot.into();
    let file_name = snapshot
        .file_name()
        .map(OsString::from)
        .ok_or_else(|| anyhow!("snapshot path {:?} has no file name", snapshot))?;
    let dir = watch_dir(&snapshot);

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    eprintln!("taskgraph: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("taskgraph: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    info!("watching {:?} for changes", snapshot);

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!("received notify event: {:?}", event);

            if !(event.kind.is_create() || event.kind.is_modify()) {
                continue;
            }
            if !touches_file(&event, &file_name) {
                continue;
            }

            if let Err(err) = runtime_tx
                .send(RuntimeEvent::SnapshotChanged {
                    reason: TriggerReason::FileWatch,
                })
                .await
            {
                warn!("failed to send RuntimeEvent::SnapshotChanged: {err}");
                // Runtime is gone; nothing left to notify.
                return;
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Directory to watch for `snapshot`; a bare file name means the working
/// directory.
fn watch_dir(snapshot: &Path) -> PathBuf {
    match snapshot.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Whether any path in `event` names the snapshot file.
pub fn touches_file(event: &Event, file_name: &OsString) -> bool {
    event
        .paths
        .iter()
        .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}
