// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use mars_gallery::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Persist it to a specific path (e.g., for testing)
//! let path = std::path::PathBuf::from("./settings.toml");
//! config::save_to_path(&config, &path).expect("Failed to save config");
//! let loaded = config::load_from_path(&path).expect("Failed to load config");
//! assert_eq!(loaded.language, Some("fr".to_string()));
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MarsGallery";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub grid_columns: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            grid_columns: Some(DEFAULT_GRID_COLUMNS),
        }
    }
}

pub const DEFAULT_GRID_COLUMNS: u16 = 4;
pub const MIN_GRID_COLUMNS: u16 = 2;
pub const MAX_GRID_COLUMNS: u16 = 8;

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
