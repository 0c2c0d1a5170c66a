//! Configuration loading
//!
//! Reads `~/.config/clipmark/config.toml`. A missing file is not an error;
//! an unreadable or invalid file falls back to defaults and reports a warning
//! the UI shows at startup.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{BookmarksConfig, ClipboardBackend, ClipboardConfig, Config};

pub const CONFIG_DIR: &str = "clipmark";
const CONFIG_FILE: &str = "config.toml";

/// Configuration plus an optional warning for the user
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            log::warn!("Could not read config {}: {}", path.display(), e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read config: {}", e)),
            };
        }
    };

    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Invalid config, using defaults: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config, using defaults: {}", e.message())),
            }
        }
    }
}
