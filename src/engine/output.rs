// src/engine/output.rs

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::errors::Result;

/// Destination for rendered documents.
pub trait OutputSink: Send {
    fn write_document(&mut self, document: &str) -> Result<()>;
}

/// Standard output or a file that is rewritten on every render.
#[derive(Debug, Clone)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Output::File(p),
            None => Output::Stdout,
        }
    }
}

impl OutputSink for Output {
    fn write_document(&mut self, document: &str) -> Result<()> {
        match self {
            Output::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(document.as_bytes())?;
                stdout.flush()?;
            }
            Output::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                std::fs::write(&*path, document)?;
                debug!(path = ?path, bytes = document.len(), "wrote rendered document");
            }
        }
        Ok(())
    }
}
