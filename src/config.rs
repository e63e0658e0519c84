//! Persisted frame settings.

use crate::color::Color;
use crate::frame::DEFAULT_FOCUS_WIDTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Frame settings that persist between sessions.
///
/// ```toml
/// tooltips = true
/// focus_drawing = true
/// focus_width = 1.5
/// focus_color = { r = 0.2, g = 0.4, b = 1.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Show tooltips using the built-in tracker.
    pub tooltips: bool,
    /// Draw a highlight around the focus view.
    pub focus_drawing: bool,
    pub focus_color: Color,
    pub focus_width: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        FrameConfig {
            tooltips: false,
            focus_drawing: false,
            focus_color: Color::RED,
            focus_width: DEFAULT_FOCUS_WIDTH,
        }
    }
}

impl FrameConfig {
    pub fn from_toml_str(source: &str) -> Result<FrameConfig, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Loads settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<FrameConfig, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        FrameConfig::from_toml_str(&source)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let source = self.to_toml_string()?;
        std::fs::write(path, source).map_err(|source| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
