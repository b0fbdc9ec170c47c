//! Core type definitions used across the DropShare workspace.

pub mod id;
pub mod sorting;

pub use id::FileId;
pub use sorting::SortDirection;
