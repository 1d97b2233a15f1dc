// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Project layout and state markers.

use crate::config::TailboneConfig;
use crate::error::{Result, TailboneError};
use crate::process::ToolLocator;
use std::path::{Path, PathBuf};

/// The template checkout, also the "initialized" marker.
pub const CHECKOUT_DIR: &str = "tailbone";

/// The "is a repo root" marker.
pub const GIT_DIR: &str = ".git";

/// The app descriptor in the project root.
pub const APP_DESCRIPTOR: &str = "app.yaml";

/// Descriptor template shipped inside the checkout.
pub const TEMPLATE_DESCRIPTOR: &str = "app.template.yaml";

/// Starter page, relative to the project root.
pub const INDEX_FILE: &str = "app/index.html";

/// A project rooted at a directory.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: TailboneConfig,
    locator: ToolLocator,
}

impl Project {
    /// Create a project rooted at `root`, resolving tools on PATH.
    pub fn new(root: impl Into<PathBuf>, config: TailboneConfig) -> Self {
        Self {
            root: root.into(),
            config,
            locator: ToolLocator::from_env(),
        }
    }

    /// Create a project rooted at the current directory.
    pub fn current(config: TailboneConfig) -> Result<Self> {
        let root = std::env::current_dir()?;
        Ok(Self::new(root, config))
    }

    /// Use a different tool locator.
    pub fn with_locator(mut self, locator: ToolLocator) -> Self {
        self.locator = locator;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &TailboneConfig {
        &self.config
    }

    pub fn locator(&self) -> &ToolLocator {
        &self.locator
    }

    pub fn checkout_dir(&self) -> PathBuf {
        self.root.join(CHECKOUT_DIR)
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(APP_DESCRIPTOR)
    }

    pub fn template_descriptor_path(&self) -> PathBuf {
        self.checkout_dir().join(TEMPLATE_DESCRIPTOR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Whether the checkout exists. Any entry named `tailbone` counts.
    pub fn is_initialized(&self) -> bool {
        self.checkout_dir().exists()
    }

    /// Whether the root is a git repository root.
    pub fn is_git_repo(&self) -> bool {
        self.root.join(GIT_DIR).exists()
    }

    pub fn has_descriptor(&self) -> bool {
        self.descriptor_path().exists()
    }

    /// Fail with `NotInitialized` unless the checkout exists.
    pub fn require_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(TailboneError::NotInitialized)
        }
    }
}
