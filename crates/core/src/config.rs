//! Application configuration loaded from an optional TOML file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use ::config::{Config, File, FileFormat};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::stats::{ReportStyle, MIN_COLUMN_WIDTH};

/// Directory under the user's config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "garden-analytics";

const DEFAULT_CONFIG: &str = r#"# Garden analytics settings.

# tracing filter directive, e.g. "info" or "garden_core=debug".
log_level = "info"

# Append logs to this file as well as stdout.
# log_file = "garden-analytics.log"

[report]
column_width = 15
placeholder = "-"
# "text" or "json"
format = "text"
color = true
"#;

/// How the demo prints reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-column text.
    #[default]
    Text,
    /// Pretty-printed JSON of the report data.
    Json,
}

/// Report presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Width each report column is padded to.
    pub column_width: usize,
    /// Shown for attributes a plant does not have.
    pub placeholder: String,
    /// Output format.
    pub format: ReportFormat,
    /// Bold headings when printing to a terminal.
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let style = ReportStyle::default();
        Self {
            column_width: style.column_width,
            placeholder: style.placeholder,
            format: ReportFormat::default(),
            color: true,
        }
    }
}

impl ReportConfig {
    /// Layout used by the text renderers.
    pub fn style(&self) -> ReportStyle {
        ReportStyle {
            column_width: self.column_width,
            placeholder: self.placeholder.clone(),
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Filter directive handed to the log subscriber.
    pub log_level: String,
    /// Optional file that receives a copy of the log output.
    pub log_file: Option<PathBuf>,
    /// Report settings.
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from `path`. Missing keys, or a missing file, take their defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: AppConfig = settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.report.column_width < MIN_COLUMN_WIDTH {
            bail!(
                "report.column_width must be at least {MIN_COLUMN_WIDTH}, got {}",
                self.report.column_width
            );
        }
        if self.log_level.trim().is_empty() {
            bail!("log_level must not be empty");
        }
        Ok(())
    }
}

/// `<config dir>/garden-analytics/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join("config.toml")
}

/// Write the commented default config to the default location if none exists.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = default_config_path();
    write_default_config(&path)?;
    Ok(path)
}

/// Write the default config to `path` unless a file is already there.
pub fn write_default_config(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write config {}", path.display()))
}
