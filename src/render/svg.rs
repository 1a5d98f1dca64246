// src/render/svg.rs

use std::borrow::Cow;
use std::fmt::Write;

use anyhow::anyhow;

use crate::config::{LayoutConfig, RenderConfig};
use crate::errors::Result;
use crate::layout::Layout;
use crate::types::EdgeStyle;

const EDGE_COLOR: &str = "#94a3b8";
const NODE_FILL: &str = "#f8fafc";
const TEXT_COLOR: &str = "#0f172a";

/// Cut `title` to `max_chars` characters, appending `…` when it was longer.
pub fn truncate_title(title: &str, max_chars: usize) -> Cow<'_, str> {
    match title.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}…", &title[..cut])),
        None => Cow::Borrowed(title),
    }
}

/// Escape text for use in XML content and attribute values.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render a standalone SVG document for `layout`.
///
/// Connectors are drawn first so node boxes sit on top of them.
pub fn render_svg(
    layout: &Layout,
    layout_cfg: &LayoutConfig,
    render_cfg: &RenderConfig,
) -> Result<String> {
    let mut out = String::new();
    write_svg(&mut out, layout, layout_cfg, render_cfg)
        .map_err(|e| anyhow!("failed to format SVG document: {e}"))?;
    Ok(out)
}

fn write_svg(
    out: &mut String,
    layout: &Layout,
    layout_cfg: &LayoutConfig,
    render_cfg: &RenderConfig,
) -> std::fmt::Result {
    let w = layout_cfg.node_width;
    let h = layout_cfg.node_height;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        layout.width, layout.height, layout.width, layout.height
    )?;
    writeln!(out, "  <defs>")?;
    writeln!(
        out,
        r#"    <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">"#
    )?;
    writeln!(out, r#"      <polygon points="0 0, 8 3, 0 6" fill="{EDGE_COLOR}"/>"#)?;
    writeln!(out, "    </marker>")?;
    writeln!(out, "  </defs>")?;

    let dash = match render_cfg.edge_style {
        EdgeStyle::Dashed => r#" stroke-dasharray="6,4""#,
        EdgeStyle::Solid => "",
    };

    for edge in &layout.edges {
        writeln!(
            out,
            r#"  <line data-from="{}" data-to="{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{EDGE_COLOR}" stroke-width="1.5"{dash} marker-end="url(#arrowhead)" opacity="0.5"/>"#,
            escape_xml(&edge.from),
            escape_xml(&edge.to),
            edge.x1,
            edge.y1,
            edge.x2,
            edge.y2,
        )?;
    }

    let palette = &render_cfg.palette;
    for (idx, node) in layout.nodes.iter().enumerate() {
        let color = escape_xml(palette.get(idx % palette.len().max(1)).map_or("", String::as_str));
        let (x, y) = (node.position.x, node.position.y);
        let label = truncate_title(&node.title, render_cfg.title_max_chars);

        writeln!(out, r#"  <g data-id="{}">"#, escape_xml(&node.id))?;
        writeln!(
            out,
            r#"    <rect x="{x}" y="{y}" width="{w}" height="{h}" rx="8" fill="{NODE_FILL}" stroke="{color}" stroke-width="1.5"/>"#
        )?;
        writeln!(
            out,
            r#"    <rect x="{x}" y="{y}" width="4" height="{h}" rx="2" fill="{color}"/>"#
        )?;
        writeln!(
            out,
            r#"    <text x="{}" y="{}" fill="{TEXT_COLOR}" font-size="12" font-weight="500" font-family="sans-serif">{}</text>"#,
            x + 14.0,
            y + h / 2.0 + 4.0,
            escape_xml(&label),
        )?;
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")
}
