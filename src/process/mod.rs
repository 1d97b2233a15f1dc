// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! External tool integration.
//!
//! Locating executables on PATH and running them with their output
//! streamed to the terminal.

mod pipe;
mod tools;

pub use pipe::{CommandRunner, PipedRunner};
pub use tools::{ToolLocator, CLOUD_SDK_HINT, GIT_HINT};
