// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Usage text printed for a missing or unrecognized command.
pub const USAGE: &str = "
tailbone init:
  Initialize tailbone
tailbone serve:
  Serve tailbone locally
tailbone deploy {version_name}:
  Deploy tailbone to AppEngine
tailbone update:
  Update the version of tailbone to latest
tailbone version:
  Get the version of tailbone

";

/// Tailbone - bootstrap, serve, and deploy App Engine projects
#[derive(Parser, Debug)]
#[command(name = "tailbone")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Bootstrap, serve, and deploy tailbone projects", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add the tailbone submodule and starter files
    Init {
        /// Ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<String>,
    },

    /// Serve tailbone locally
    #[command(disable_help_flag = true)]
    Serve(ServeArgs),

    /// Deploy tailbone to AppEngine
    Deploy(DeployArgs),

    /// Update the version of tailbone to latest
    Update {
        /// Ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<String>,
    },

    /// Print version information
    Version {
        /// Ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<String>,
    },

    /// Anything else falls through to the usage text
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Arguments for the serve command.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Arguments passed to the local app server
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the deploy command.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
pub struct DeployArgs {
    /// Version name written to app.yaml
    #[arg(value_name = "VERSION_NAME", allow_hyphen_values = true)]
    pub version: Option<String>,

    /// Anything after the version name is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

/// Print the usage text to stdout.
pub fn print_usage() {
    print!("{}", USAGE);
}
