// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Asking the user for an application id.

use crate::error::{Result, TailboneError};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{BufRead, IsTerminal};

use super::app_yaml::is_valid_application_id;

/// Printed before asking for the application id.
pub const APPLICATION_ID_NOTICE: &str = "You must enter an application id. If you haven't already created a project, do so now at http://cloud.google.com";

/// Source of a replacement application id.
pub trait ApplicationPrompt {
    /// Ask for an application id. The returned id is always valid.
    fn application_id(&self) -> Result<String>;
}

/// Prompts on the terminal, or reads a line from stdin when nobody is
/// attending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl ApplicationPrompt for TerminalPrompt {
    fn application_id(&self) -> Result<String> {
        let stdin = std::io::stdin();

        if console::user_attended() && stdin.is_terminal() {
            println!("{}", APPLICATION_ID_NOTICE);
            prompt_interactive()
        } else {
            ask(stdin.lock())
        }
    }
}

/// Print the notice and read the answer from `input`.
fn ask(input: impl BufRead) -> Result<String> {
    println!("{}", APPLICATION_ID_NOTICE);
    read_token(input)
}

fn prompt_interactive() -> Result<String> {
    let theme = ColorfulTheme::default();

    let id: String = Input::with_theme(&theme)
        .with_prompt("Application id")
        .validate_with(|input: &String| {
            if is_valid_application_id(input.trim()) {
                Ok(())
            } else {
                Err("Use letters, digits and hyphens, and replace the placeholder id")
            }
        })
        .interact_text()?;

    Ok(id.trim().to_string())
}

/// Read the first whitespace-delimited token of one line.
fn read_token(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let token = line.split_whitespace().next().unwrap_or_default().to_string();
    tracing::debug!("Read application id {:?} from stdin", token);

    if is_valid_application_id(&token) {
        Ok(token)
    } else {
        Err(TailboneError::InvalidApplicationId { id: token })
    }
}
