use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_WIDTH: usize = 15;
pub const DEFAULT_HEIGHT: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid dimensions must be non-zero, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
}

/// Settings for an editing session. Every field is optional in the JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub width: usize,
    pub height: usize,
    /// Overrides the default capacity of half the grid's cells
    pub max_filled_cells: Option<usize>,
    pub log_file: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_filled_cells: None,
            log_file: PathBuf::from("exports/editor.log"),
        }
    }
}

impl EditorConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }
}
