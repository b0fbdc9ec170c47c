//! Interactive prompts built on `dialoguer`.

use dialoguer::{Confirm, Input};

use dropshare_core::error::{AppError, ErrorKind};
use dropshare_core::result::AppResult;
use dropshare_core::traits::ConfirmPrompt;

/// Asks on the terminal, defaulting to "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerConfirm;

impl ConfirmPrompt for DialoguerConfirm {
    fn confirm(&self, message: &str) -> AppResult<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(input_error)
    }
}

/// Line editor seeded with the current name.
///
/// Returns the submitted text. Enter submits; the caller treats an empty
/// line as a cancel.
pub fn edit_name(current: &str) -> AppResult<String> {
    Input::<String>::new()
        .with_prompt("New name")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::with_source(ErrorKind::Io, format!("Input error: {e}"), e)
}
