//! Confirmation seam for destructive actions.

use crate::result::AppResult;

/// Asks the user to confirm an irreversible action.
pub trait ConfirmPrompt: Send + Sync {
    /// Return `true` only if the user explicitly agreed.
    fn confirm(&self, message: &str) -> AppResult<bool>;
}

/// A prompt that always agrees, for non-interactive use (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl ConfirmPrompt for AssumeYes {
    fn confirm(&self, _message: &str) -> AppResult<bool> {
        Ok(true)
    }
}
