// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The app.yaml descriptor.
//!
//! The descriptor is edited as plain text: only the `application:` and
//! `version:` lines are rewritten, everything else passes through as-is.

mod app_yaml;
mod prompt;

pub use app_yaml::{is_valid_application_id, AppDescriptor, DEFAULT_APPLICATION};
pub use prompt::{ApplicationPrompt, TerminalPrompt, APPLICATION_ID_NOTICE};
