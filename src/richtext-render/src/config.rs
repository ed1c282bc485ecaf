//! TOML configuration for themes and render limits.
//!
//! # Configuration Structure
//!
//! ```toml
//! [theme]
//! preset = "dark"
//! indentation_multiplier = 2.0
//!
//! [theme.colors]
//! text = "#FFFFFF"
//! link = "blue"
//! heading = "#00FFA3"
//! quote = "gray"
//!
//! [render]
//! max_depth = 64
//! ```
//!
//! Every section and key is optional. Colours use ratatui's colour syntax
//! (named colours, `#RRGGBB` or an indexed number).

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::renderer::RenderOptions;
use crate::theme::TerminalTheme;
use crate::validate::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A colour value ratatui cannot parse.
    #[error("Invalid color for '{key}': '{value}'")]
    InvalidColor { key: String, value: String },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Root of a render configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub theme: ThemeConfig,
    pub render: RenderSection,
}

/// `[theme]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preset the overrides apply to: `"dark"` or `"light"`.
    pub preset: String,
    /// Paragraph indent per nesting level; the preset's value when unset.
    pub indentation_multiplier: Option<f32>,
    pub colors: ColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            indentation_multiplier: None,
            colors: ColorOverrides::default(),
        }
    }
}

fn default_preset() -> String {
    "dark".to_string()
}

/// `[theme.colors]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub text: Option<String>,
    pub link: Option<String>,
    pub heading: Option<String>,
    pub quote: Option<String>,
}

/// `[render]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    pub max_depth: usize,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<string>"),
            source,
        })
    }

    /// Loads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading render config");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the terminal theme: the preset with colour and indent
    /// overrides applied.
    pub fn theme(&self) -> ConfigResult<TerminalTheme> {
        let preset = &self.theme.preset;
        let mut theme =
            TerminalTheme::from_name(preset).ok_or_else(|| ConfigError::InvalidValue {
                key: "theme.preset".to_string(),
                message: format!(
                    "unknown preset '{preset}', expected one of {}",
                    TerminalTheme::PRESETS.join(", ")
                ),
            })?;

        if let Some(multiplier) = self.theme.indentation_multiplier {
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: "theme.indentation_multiplier".to_string(),
                    message: format!("must be a non-negative number, got {multiplier}"),
                });
            }
            theme = theme.with_indentation_multiplier(multiplier);
        }

        let colors = &self.theme.colors;
        if let Some(color) = parse_color("theme.colors.text", colors.text.as_deref())? {
            theme = theme.with_text_color(color);
        }
        if let Some(color) = parse_color("theme.colors.heading", colors.heading.as_deref())? {
            theme = theme.with_heading_color(color);
        }
        if let Some(color) = parse_color("theme.colors.link", colors.link.as_deref())? {
            let style = theme.link_text.fg(color);
            theme = theme.with_link_text(style);
        }
        if let Some(color) = parse_color("theme.colors.quote", colors.quote.as_deref())? {
            let style = theme.quote_text.fg(color);
            theme = theme.with_quote_text(style);
        }

        Ok(theme)
    }

    /// Render limits from the `[render]` section.
    pub fn options(&self) -> ConfigResult<RenderOptions> {
        if !(1..=MAX_SUPPORTED_DEPTH).contains(&self.render.max_depth) {
            return Err(ConfigError::InvalidValue {
                key: "render.max_depth".to_string(),
                message: format!(
                    "must be between 1 and {MAX_SUPPORTED_DEPTH}, got {}",
                    self.render.max_depth
                ),
            });
        }
        Ok(RenderOptions {
            max_depth: self.render.max_depth,
        })
    }
}

fn parse_color(key: &str, value: Option<&str>) -> ConfigResult<Option<Color>> {
    value
        .map(|raw| {
            Color::from_str(raw.trim()).map_err(|_| ConfigError::InvalidColor {
                key: key.to_string(),
                value: raw.to_string(),
            })
        })
        .transpose()
}
