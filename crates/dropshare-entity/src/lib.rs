//! # dropshare-entity
//!
//! Domain entity models for DropShare. [`file::FileRecord`] is the one
//! persisted document; the other types describe its creation, its single
//! mutable field, and the values it carries.

pub mod file;

pub use file::{CreateFileRecord, FileRecord, FileRecordPatch, MimeType};
