// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for tailbone.
//!
//! This module handles loading and parsing the optional tailbone.toml that
//! overrides the template source and external tool names.

mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
