//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default width of the rule lines around the declaration
pub const DEFAULT_RULE_WIDTH: u16 = 76;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "participant_form=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Width of the declaration rule lines
    pub rule_width: Option<u16>,
    /// Color name used to highlight the focused control
    pub accent_color: Option<String>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "participant-form", "participant-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("participant-form.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Self::from_json(&content);
            }
        }

        Ok(Self::default())
    }

    /// Parse configuration from its JSON text
    fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn rule_width(&self) -> u16 {
        self.rule_width.unwrap_or(DEFAULT_RULE_WIDTH).max(1)
    }

    /// Accent color, falling back to cyan for unknown names
    pub fn accent_color(&self) -> Color {
        self.accent_color
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or(Color::Cyan)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
