use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};
use crate::layout::ChromeInsets;
use crate::print::PageSetup;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// Viewer settings, loaded from TOML. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Print command; the page file path is appended as the last argument.
    pub print_command: Vec<String>,
    pub window: WindowConfig,
    pub chrome: ChromeInsets,
    pub page: PageSetup,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            print_command: vec!["lp".into()],
            window: WindowConfig::default(),
            chrome: ChromeInsets::default(),
            page: PageSetup::default(),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ViewerError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ViewerError::Config(e.to_string()))
    }
}
