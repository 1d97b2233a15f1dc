// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for tailbone.
//!
//! Every failure is terminal for the current invocation; `main` prints the
//! message and exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for tailbone operations.
#[derive(Error, Debug)]
pub enum TailboneError {
    // Project state errors
    #[error("Tailbone is already initialized.")]
    AlreadyInitialized,

    #[error("Your current directory must be a git repo.")]
    NotAGitRepo,

    #[error("Must run 'tailbone init' first.")]
    NotInitialized,

    #[error("Must have app.yaml, this can be copied from tailbone/app.template.yaml.")]
    MissingAppDescriptor,

    // External tool errors
    #[error("Problem checking out the tailbone git submodule: {message}")]
    SubmoduleCheckoutFailed { message: String },

    #[error("Could not find '{executable}' on your PATH. {hint}")]
    MissingDependency { executable: String, hint: String },

    #[error("Failed to start '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    // Deploy errors
    #[error("Must provide a version name. Example: tailbone deploy master")]
    MissingVersionArgument,

    #[error("Incorrectly formatted app.yaml: {message}")]
    MalformedDescriptor { message: String },

    #[error("Invalid application id: '{id}'")]
    InvalidApplicationId { id: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for TailboneError {
    fn from(err: dialoguer::Error) -> Self {
        TailboneError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Cannot read configuration file {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias for tailbone operations.
pub type Result<T> = std::result::Result<T, TailboneError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TailboneError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
