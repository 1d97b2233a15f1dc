// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the configuration that can be loaded from tailbone.toml. Every
//! field has a default, so an empty file behaves exactly like no file.

use serde::{Deserialize, Serialize};

/// The main configuration structure for tailbone.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TailboneConfig {
    /// Where the project template is fetched from.
    pub template: TemplateConfig,

    /// Names of the external executables.
    pub tools: ToolsConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl TailboneConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Template source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Repository added as the `tailbone` submodule.
    pub url: String,

    /// Branch tracked by the submodule.
    pub branch: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            url: "https://github.com/doug/tailbone.git".to_string(),
            branch: "reorg".to_string(),
        }
    }
}

/// External executables, resolved on PATH.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Version control executable.
    pub git: String,

    /// Local application server.
    pub app_server: String,

    /// Deployment executable.
    pub deployer: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            app_server: "dev_appserver.py".to_string(),
            deployer: "appcfg.py".to_string(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors in output.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
