// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Running external commands with live output.

use crate::error::Result;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Runs an external command to completion.
///
/// Returns the exit code (`None` if the process was killed by a signal).
/// Only a failure to start the process is an error; a non-zero exit is
/// left to the caller to interpret.
pub trait CommandRunner {
    fn run(&self, program: &OsStr, args: &[String], cwd: &Path) -> Result<Option<i32>>;
}

/// Runs commands with stdout and stderr forwarded to this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipedRunner;

impl CommandRunner for PipedRunner {
    fn run(&self, program: &OsStr, args: &[String], cwd: &Path) -> Result<Option<i32>> {
        tracing::debug!("Running {:?} {:?} in {:?}", program, args, cwd);

        let mut child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout_handle = child.stdout.take().map(|mut stdout| {
            thread::spawn(move || io::copy(&mut stdout, &mut io::stdout()))
        });
        let stderr_handle = child.stderr.take().map(|mut stderr| {
            thread::spawn(move || io::copy(&mut stderr, &mut io::stderr()))
        });

        let status = child.wait()?;

        // Drain whatever is still buffered in the pipes before returning.
        for handle in [stdout_handle, stderr_handle].into_iter().flatten() {
            match handle.join() {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::debug!("Output forwarding stopped: {}", e),
                Err(_) => tracing::debug!("Output forwarding thread panicked"),
            }
        }

        tracing::debug!("{:?} exited with {}", program, status);
        Ok(status.code())
    }
}
