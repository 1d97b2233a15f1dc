// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Line-anchored editing of app.yaml.

use crate::error::{Result, ResultExt, TailboneError};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::path::Path;

/// Placeholder application id shipped in the template descriptor.
pub const DEFAULT_APPLICATION: &str = "your-application-id";

lazy_static! {
    /// The `application:` line and its identifier.
    static ref APPLICATION_REGEX: Regex =
        Regex::new(r"(?m)^application:[ \t]*([a-zA-Z0-9-]+)[ \t]*").unwrap();

    /// The `version:` line and its identifier.
    static ref VERSION_REGEX: Regex =
        Regex::new(r"(?m)^version:[ \t]*([a-zA-Z0-9-]+)[ \t]*").unwrap();

    static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9-]+$").unwrap();
}

/// Check that an application id can be written back to the descriptor.
///
/// The id must be something the `application:` pattern would capture again,
/// and must not be the placeholder.
pub fn is_valid_application_id(id: &str) -> bool {
    IDENTIFIER_REGEX.is_match(id) && id != DEFAULT_APPLICATION
}

/// The text of an app.yaml file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    content: String,
}

impl AppDescriptor {
    /// Wrap descriptor text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Read a descriptor from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?;
        Ok(Self::new(content))
    }

    /// Write the descriptor back, replacing the file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.content)
            .context(format!("Failed to write {}", path.display()))
    }

    /// The application id.
    ///
    /// Exactly one `application:` line must be present.
    pub fn application(&self) -> Result<&str> {
        let mut matches = APPLICATION_REGEX.captures_iter(&self.content);

        let first = matches
            .next()
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| TailboneError::MalformedDescriptor {
                message: "could not find application.".to_string(),
            })?;

        if matches.next().is_some() {
            return Err(TailboneError::MalformedDescriptor {
                message: "application is set more than once.".to_string(),
            });
        }

        Ok(first.as_str())
    }

    /// Whether the application id is still the template placeholder.
    pub fn has_default_application(&self) -> Result<bool> {
        Ok(self.application()? == DEFAULT_APPLICATION)
    }

    /// Replace the application id.
    pub fn set_application(&mut self, id: &str) -> Result<()> {
        if !is_valid_application_id(id) {
            return Err(TailboneError::InvalidApplicationId { id: id.to_string() });
        }
        // Validates the descriptor shape before rewriting.
        self.application()?;

        self.content = APPLICATION_REGEX
            .replace_all(&self.content, |_: &Captures<'_>| format!("application: {}", id))
            .into_owned();
        Ok(())
    }

    /// Replace the value of every `version:` line.
    pub fn set_version(&mut self, version: &str) -> Result<()> {
        if !VERSION_REGEX.is_match(&self.content) {
            return Err(TailboneError::MalformedDescriptor {
                message: "could not find version.".to_string(),
            });
        }

        self.content = VERSION_REGEX
            .replace_all(&self.content, |_: &Captures<'_>| format!("version: {}", version))
            .into_owned();
        Ok(())
    }

    /// The current text.
    pub fn as_str(&self) -> &str {
        &self.content
    }
}
