// src/render/mod.rs

//! Turning a [`Layout`] into an output document.

pub mod svg;

use clap::ValueEnum;

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::layout::Layout;

pub use svg::{escape_xml, render_svg, truncate_title};

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

/// Render `layout` in the requested format.
pub fn render(layout: &Layout, cfg: &ConfigFile, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Svg => render_svg(layout, cfg.layout(), cfg.render()),
        OutputFormat::Json => render_json(layout),
    }
}

/// Pretty-printed JSON dump of the layout.
pub fn render_json(layout: &Layout) -> Result<String> {
    let mut s = serde_json::to_string_pretty(layout)?;
    s.push('\n');
    Ok(s)
}
