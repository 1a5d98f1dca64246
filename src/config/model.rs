// src/config/model.rs

use serde::Deserialize;

use crate::types::{CyclePolicy, EdgeStyle};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [layout]
/// node_width = 160.0
/// node_height = 44.0
/// level_gap = 100.0
/// node_gap = 30.0
/// cycle_policy = "fallback"
///
/// [render]
/// title_max_chars = 18
/// palette = ["#4f46e5", "#0ea5e9"]
/// edge_style = "dashed"
/// ```
///
/// All sections and keys are optional; missing values take the defaults of
/// the web dependency panel.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (or `Default`, whose
/// values are known-good), so holders can rely on positive node sizes and
/// non-negative gaps.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    layout: LayoutConfig,
    render: RenderConfig,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(layout: LayoutConfig, render: RenderConfig) -> Self {
        Self { layout, render }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Override the cycle policy (used by `--strict`).
    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.layout.cycle_policy = policy;
        self
    }
}

/// `[layout]` section: node metrics and canvas bounds, in pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Horizontal space between two level columns.
    pub level_gap: f64,
    /// Vertical space between two nodes of the same level.
    pub node_gap: f64,
    pub left_margin: f64,
    /// Smallest `y` a level group may start at.
    pub top_margin: f64,
    /// Space kept below the lowest node when the canvas grows.
    pub bottom_margin: f64,
    /// Nominal canvas height; level groups are centered in it.
    pub canvas_height: f64,
    pub cycle_policy: CyclePolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 160.0,
            node_height: 44.0,
            level_gap: 100.0,
            node_gap: 30.0,
            left_margin: 40.0,
            top_margin: 20.0,
            bottom_margin: 40.0,
            canvas_height: 300.0,
            cycle_policy: CyclePolicy::Fallback,
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance between the left edges of two adjacent levels.
    pub fn column_pitch(&self) -> f64 {
        self.node_width + self.level_gap
    }

    /// Vertical distance between the top edges of two stacked nodes.
    pub fn row_pitch(&self) -> f64 {
        self.node_height + self.node_gap
    }
}

/// `[render]` section: SVG output options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Titles longer than this many characters are cut and get an ellipsis.
    pub title_max_chars: usize,

    /// Node stroke colors, assigned by task index modulo the palette length.
    pub palette: Vec<String>,

    pub edge_style: EdgeStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title_max_chars: 18,
            palette: vec![
                "#6366f1".to_string(),
                "#06b6d4".to_string(),
                "#22c55e".to_string(),
                "#f59e0b".to_string(),
            ],
            edge_style: EdgeStyle::Dashed,
        }
    }
}
