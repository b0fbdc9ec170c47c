//! # dropshare-core
//!
//! Core crate for DropShare. Contains the configuration schemas, typed
//! identifiers, the clipboard and confirmation seams implemented by the
//! outer crates, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DropShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
