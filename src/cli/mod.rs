// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for tailbone.
//!
//! This module handles command-line argument parsing and command dispatch.

pub mod args;
mod dispatch;

pub use args::{print_usage, Cli, Commands, USAGE};
pub use dispatch::{run, Exit};
