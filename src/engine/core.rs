// src/engine/core.rs

//! Pure core of the re-render loop.
//!
//! [`LayoutCore`] turns a [`TaskSnapshot`] into a rendered document, and
//! remembers the digest of the last snapshot that was written out so an
//! unchanged snapshot costs nothing. It has no channels and performs no IO,
//! so it can be tested without Tokio.

use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::layout::compute_layout;
use crate::render::{render, OutputFormat};
use crate::source::TaskSnapshot;

/// A document produced by [`LayoutCore::step`], not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub document: String,
    /// Digest of the snapshot the document was rendered from.
    pub digest: String,
}

#[derive(Debug)]
pub struct LayoutCore {
    config: ConfigFile,
    format: OutputFormat,
    last_digest: Option<String>,
}

impl LayoutCore {
    pub fn new(config: ConfigFile, format: OutputFormat) -> Self {
        Self {
            config,
            format,
            last_digest: None,
        }
    }

    /// Digest of the last snapshot whose document was written.
    pub fn last_digest(&self) -> Option<&str> {
        self.last_digest.as_deref()
    }

    /// Render `snapshot`, or return `None` if it matches the last written one.
    ///
    /// The digest is only remembered once the caller reports a successful
    /// write through [`LayoutCore::commit`]. A failed layout (e.g. a cycle
    /// under the `reject` policy) never touches it.
    pub fn step(&self, snapshot: &TaskSnapshot) -> Result<Option<Rendered>> {
        if self.last_digest.as_deref() == Some(snapshot.digest.as_str()) {
            debug!(digest = %snapshot.digest, "snapshot unchanged; skipping layout");
            return Ok(None);
        }

        let layout = compute_layout(&snapshot.tasks, self.config.layout())?;
        let document = render(&layout, &self.config, self.format)?;

        info!(
            tasks = layout.nodes.len(),
            edges = layout.edges.len(),
            levels = layout.max_level() + usize::from(!layout.is_empty()),
            "rendered task graph"
        );

        Ok(Some(Rendered {
            document,
            digest: snapshot.digest.clone(),
        }))
    }

    /// Record that the document for `digest` reached the output.
    pub fn commit(&mut self, digest: String) {
        self.last_digest = Some(digest);
    }
}
