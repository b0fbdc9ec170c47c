//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use dropshare_entity::file::FileRecord;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One listed file. The encoded content is never printed.
#[derive(Debug, Serialize, Tabled)]
pub struct FileRow {
    /// File ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Type label
    #[tabled(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    /// Formatted size
    pub size: String,
    /// Upload time
    pub uploaded: String,
}

impl FileRow {
    /// Build a row, flagging the record that currently shows as copied.
    pub fn new(record: &FileRecord, copied: bool) -> Self {
        let mut name = record.display_name.clone();
        if copied {
            name.push_str(" (copied)");
        }
        Self {
            id: record.id.to_string(),
            name,
            kind: record.mime_type.label().to_string(),
            size: record.display_size(),
            uploaded: record.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Print a list of items in the selected format.
///
/// `empty` is shown instead of an empty table.
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat, empty: &str) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{empty}");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item as JSON. Table mode callers print key-value lines instead.
pub fn print_json<T: Serialize>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<12} {}", format!("{key}:"), value);
}
