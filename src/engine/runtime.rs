// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::errors::Result;
use crate::source::TaskSource;

use super::core::LayoutCore;
use super::output::OutputSink;
use super::RuntimeEvent;

/// Re-renders the task graph in response to `RuntimeEvent`s.
///
/// This is the IO shell around [`LayoutCore`]: it fetches snapshots from a
/// [`TaskSource`] and hands rendered documents to an [`OutputSink`].
pub struct Runtime<S: TaskSource, O: OutputSink> {
    core: LayoutCore,
    source: S,
    output: O,
}

impl<S: TaskSource, O: OutputSink> fmt::Debug for Runtime<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .field("source", &self.source.describe())
            .finish_non_exhaustive()
    }
}

impl<S: TaskSource, O: OutputSink> Runtime<S, O> {
    pub fn new(core: LayoutCore, source: S, output: O) -> Self {
        Self {
            core,
            source,
            output,
        }
    }

    pub fn core(&self) -> &LayoutCore {
        &self.core
    }

    /// Fetch, lay out and write once.
    ///
    /// Returns `true` if a document was written, `false` if the snapshot was
    /// unchanged since the last write. A failed write leaves the snapshot
    /// pending, so the next call tries again.
    pub async fn render_once(&mut self) -> Result<bool> {
        let snapshot = self.source.fetch().await?;

        match self.core.step(&snapshot)? {
            Some(rendered) => {
                self.output.write_document(&rendered.document)?;
                self.core.commit(rendered.digest);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Main event loop.
    ///
    /// Errors while re-rendering are logged and the loop keeps going; a
    /// half-edited snapshot file should not stop watch mode.
    pub async fn run(mut self, mut event_rx: mpsc::Receiver<RuntimeEvent>) -> Result<()> {
        info!(source = %self.source.describe(), "taskgraph runtime started");

        loop {
            let event = match event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::SnapshotChanged { reason } => {
                    match self.render_once().await {
                        Ok(true) => debug!(?reason, "re-rendered after snapshot change"),
                        Ok(false) => debug!(?reason, "snapshot content unchanged"),
                        Err(err) => error!(?reason, "failed to render task graph: {err}"),
                    }
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested; stopping runtime");
                    break;
                }
            }
        }

        info!("runtime exiting");
        Ok(())
    }
}
