// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, Result, TailboneError};
use std::path::{Path, PathBuf};

use super::schema::TailboneConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["tailbone.toml", ".tailbone.toml"];

/// Find the configuration file for the current directory.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file for a project root.
///
/// Only the project root itself is searched, since every other path the
/// tool touches is relative to it. Falls back to the home directory and
/// then `$XDG_CONFIG_HOME/tailbone/config.toml`.
pub fn find_config_file_from(project_root: &Path) -> Option<PathBuf> {
    for config_name in CONFIG_FILES {
        let config_path = project_root.join(config_name);
        if config_path.exists() {
            return Some(config_path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".tailbone.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("tailbone").join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<TailboneConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(TailboneConfig::default())
        }
    }
}

/// Load configuration from a specific path.
///
/// Errors name the file, since the config may come from the home or XDG
/// directory rather than the project.
pub fn load_config_from(path: &Path) -> Result<TailboneConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(TailboneError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        TailboneError::Config(ConfigError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })?;

    parse_config(&content).map_err(|e| match e {
        TailboneError::Config(ConfigError::ParseError { message }) => {
            TailboneError::Config(ConfigError::ParseError {
                message: format!("{}: {}", path.display(), message),
            })
        }
        other => other,
    })
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<TailboneConfig> {
    toml::from_str(content).map_err(|e| {
        TailboneError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}
