// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Executable lookup on the search path.

use crate::error::{Result, TailboneError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Shown when the app server or deployer is missing.
pub const CLOUD_SDK_HINT: &str = "You must have the cloud sdk for python installed on your system. Download it at https://developers.google.com/cloud/sdk/";

/// Shown when git is missing.
pub const GIT_HINT: &str = "You must have git installed.";

/// Resolves executables against PATH, or against an explicit search path.
#[derive(Debug, Clone, Default)]
pub struct ToolLocator {
    search_path: Option<OsString>,
}

impl ToolLocator {
    /// Create a locator that searches the process PATH.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a locator that searches the given PATH-style list instead.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Find an executable, returning its full path.
    pub fn find(&self, executable: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
                which::which_in(executable, Some(paths), cwd)
            }
            None => which::which(executable),
        };

        match found {
            Ok(path) => {
                tracing::debug!("Found {} at {:?}", executable, path);
                Some(path)
            }
            Err(e) => {
                tracing::debug!("Could not find {}: {}", executable, e);
                None
            }
        }
    }

    /// Find an executable or fail with `MissingDependency`.
    pub fn require(&self, executable: &str, hint: &str) -> Result<PathBuf> {
        self.find(executable)
            .ok_or_else(|| TailboneError::MissingDependency {
                executable: executable.to_string(),
                hint: hint.to_string(),
            })
    }
}
