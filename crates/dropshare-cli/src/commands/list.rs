//! List command.

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_service::UploaderView;

use crate::output::{self, FileRow, OutputFormat};

const EMPTY_STATE: &str = "No files uploaded yet.";

/// Execute the list command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let view = super::open_uploader(config).await?;
    print_files(&view, format);
    Ok(())
}

/// Print the mounted list, or the empty-state message.
pub fn print_files(view: &UploaderView, format: OutputFormat) {
    let rows: Vec<FileRow> = view
        .files()
        .iter()
        .map(|record| FileRow::new(record, view.is_copied(record.id)))
        .collect();
    output::print_list(&rows, format, EMPTY_STATE);
}
