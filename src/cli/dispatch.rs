// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::TailboneConfig;
use crate::descriptor::TerminalPrompt;
use crate::error::Result;
use crate::process::PipedRunner;
use crate::project::{Project, APP_DESCRIPTOR, INDEX_FILE};

use super::args::{print_usage, Cli, Commands, DeployArgs, ServeArgs};

/// How a successful dispatch ends the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The command ran (or an unknown command printed usage).
    Success,
    /// No command was given.
    MissingCommand,
}

impl Exit {
    /// Process exit status.
    pub fn code(self) -> i32 {
        match self {
            Exit::Success => 0,
            Exit::MissingCommand => 1,
        }
    }
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<Exit> {
    let command = match cli.command {
        Some(command) => command,
        None => {
            print_usage();
            return Ok(Exit::MissingCommand);
        }
    };

    match command {
        Commands::Other(args) => {
            tracing::debug!("Unrecognized command: {:?}", args);
            print_usage();
            Ok(Exit::Success)
        }
        Commands::Version { .. } => run_version(),
        command => {
            let config = if let Some(config_path) = &cli.config {
                TailboneConfig::load_from(config_path)?
            } else {
                TailboneConfig::load()?
            };
            console::set_colors_enabled(config.ui.color);
            console::set_colors_enabled_stderr(config.ui.color);

            let project = Project::current(config)?;
            run_project_command(&project, command)?;
            Ok(Exit::Success)
        }
    }
}

fn run_project_command(project: &Project, command: Commands) -> Result<()> {
    match command {
        Commands::Init { .. } => run_init(project),
        Commands::Serve(args) => run_serve(project, args),
        Commands::Deploy(args) => run_deploy(project, args),
        Commands::Update { .. } => project.update(),
        Commands::Version { .. } | Commands::Other(_) => Ok(()),
    }
}

/// Run the init command.
fn run_init(project: &Project) -> Result<()> {
    tracing::debug!("Running init in {:?}", project.root());

    let report = project.init(&PipedRunner)?;

    if report.descriptor_created {
        println!("✓ Created {}", APP_DESCRIPTOR);
    }
    if report.index_created {
        println!("✓ Created {}", INDEX_FILE);
    }

    Ok(())
}

/// Run the serve command.
fn run_serve(project: &Project, args: ServeArgs) -> Result<()> {
    tracing::debug!("Running serve command with args: {:?}", args);
    project.serve(&PipedRunner, &args.args)
}

/// Run the deploy command.
fn run_deploy(project: &Project, args: DeployArgs) -> Result<()> {
    tracing::debug!("Running deploy command with args: {:?}", args);
    project.deploy(&PipedRunner, &TerminalPrompt, args.version.as_deref())
}

/// Run the version command.
fn run_version() -> Result<Exit> {
    println!("tailbone {}", crate::version::version_string());

    if let Some(sha) = crate::version::git_sha() {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::git_commit_date() {
        println!("commit date: {}", date);
    }

    Ok(Exit::Success)
}
