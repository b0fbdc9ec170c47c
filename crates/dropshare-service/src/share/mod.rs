//! Share links, the clipboard they are copied to, and the "copied" marker.

pub mod clipboard;
pub mod indicator;
pub mod link;

pub use clipboard::MemoryClipboard;
pub use indicator::CopiedIndicator;
pub use link::ShareLinkBuilder;
