//! File record entities.

pub mod mime;
pub mod model;
pub mod size;

pub use mime::MimeType;
pub use model::{CreateFileRecord, FileRecord, FileRecordPatch};
pub use size::format_size;
