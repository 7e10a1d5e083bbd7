use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ui::collapse::DEFAULT_COLLAPSED_LINES;

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to write config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Text shown in the header bar.
    pub title: String,
    /// Number of text lines a message shows before "Read more" kicks in.
    pub collapsed_lines: usize,
    pub window_width: f32,
    pub echo: EchoConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "E-Connect".to_string(),
            collapsed_lines: DEFAULT_COLLAPSED_LINES,
            window_width: 448.0,
            echo: EchoConfig::default(),
        }
    }
}

/// Stand-alone mode: the feed answers every local message itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoConfig {
    pub enabled: bool,
    pub delay_ms: u64,
    pub prefix: String,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: 600,
            prefix: "echo: ".to_string(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
