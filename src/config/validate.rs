// src/config/validate.rs

use crate::config::model::{ConfigFile, LayoutConfig, RawConfigFile, RenderConfig};
use crate::errors::{Result, TaskGraphError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = TaskGraphError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_layout(&raw.layout)?;
        validate_render(&raw.render)?;
        Ok(ConfigFile::new_unchecked(raw.layout, raw.render))
    }
}

fn validate_layout(layout: &LayoutConfig) -> Result<()> {
    ensure_positive("node_width", layout.node_width)?;
    ensure_positive("node_height", layout.node_height)?;
    ensure_positive("canvas_height", layout.canvas_height)?;

    ensure_non_negative("level_gap", layout.level_gap)?;
    ensure_non_negative("node_gap", layout.node_gap)?;
    ensure_non_negative("left_margin", layout.left_margin)?;
    ensure_non_negative("top_margin", layout.top_margin)?;
    ensure_non_negative("bottom_margin", layout.bottom_margin)?;

    Ok(())
}

fn validate_render(render: &RenderConfig) -> Result<()> {
    if render.title_max_chars == 0 {
        return Err(TaskGraphError::ConfigError(
            "[render].title_max_chars must be >= 1 (got 0)".to_string(),
        ));
    }

    if render.palette.is_empty() {
        return Err(TaskGraphError::ConfigError(
            "[render].palette must contain at least one color".to_string(),
        ));
    }

    if let Some(bad) = render.palette.iter().find(|c| c.trim().is_empty()) {
        return Err(TaskGraphError::ConfigError(format!(
            "[render].palette contains a blank color entry: {:?}",
            bad
        )));
    }

    Ok(())
}

fn ensure_positive(key: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TaskGraphError::ConfigError(format!(
            "[layout].{} must be a positive number (got {})",
            key, value
        )));
    }
    Ok(())
}

fn ensure_non_negative(key: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TaskGraphError::ConfigError(format!(
            "[layout].{} must be >= 0 (got {})",
            key, value
        )));
    }
    Ok(())
}
