//! Clipboard seam used by the copy-link action.

use crate::result::AppResult;

/// Destination for copied share links.
///
/// The terminal front end writes to the system clipboard; headless callers
/// and tests keep the text in memory.
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> AppResult<()>;
}
