//! Seam traits defined in `dropshare-core` and implemented by the outer crates.

pub mod clipboard;
pub mod prompt;

pub use clipboard::Clipboard;
pub use prompt::{AssumeYes, ConfirmPrompt};
