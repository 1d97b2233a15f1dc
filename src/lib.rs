// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Tailbone - bootstrap, serve, and deploy App Engine projects.
//!
//! `tailbone` wraps three external tools around a project template:
//!
//! - **init**: adds the template as the `tailbone` git submodule and writes
//!   `app.yaml` and `app/index.html`
//! - **serve**: runs `dev_appserver.py` on the checkout
//! - **deploy**: stamps a version into `app.yaml` and runs `appcfg.py`
//! - **update**: checks the setup; updating the submodule is still manual
//!
//! # Example
//!
//! ```no_run
//! use tailbone::config::TailboneConfig;
//! use tailbone::process::PipedRunner;
//! use tailbone::project::Project;
//!
//! let project = Project::current(TailboneConfig::default()).unwrap();
//! project.serve(&PipedRunner, &["--port".to_string(), "9090".to_string()]).unwrap();
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod process;
pub mod project;

// Re-exports for convenience
pub use config::TailboneConfig;
pub use error::{Result, TailboneError};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of tailbone.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Placeholder vergen writes when git metadata is unavailable.
    const IDEMPOTENT_OUTPUT: &str = "VERGEN_IDEMPOTENT_OUTPUT";

    fn known(value: Option<&'static str>) -> Option<&'static str> {
        value.filter(|v| !v.is_empty() && *v != IDEMPOTENT_OUTPUT)
    }

    /// The git SHA at compile time (if available).
    pub fn git_sha() -> Option<&'static str> {
        known(option_env!("VERGEN_GIT_SHA"))
    }

    /// The git commit date at compile time (if available).
    pub fn git_commit_date() -> Option<&'static str> {
        known(option_env!("VERGEN_GIT_COMMIT_DATE"))
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (git_sha(), git_commit_date()) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => format!("{} ({})", VERSION, &sha[..7.min(sha.len())]),
            _ => VERSION.to_string(),
        }
    }

}
