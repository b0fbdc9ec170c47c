//! # dropshare-cli
//!
//! Binds the DropShare views to a terminal. Each command builds the store
//! client from configuration, mounts the view it needs, and renders the
//! result as a table or JSON.

pub mod clipboard;
pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::Cli;
pub use output::OutputFormat;
