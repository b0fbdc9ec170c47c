//! Upload command.

use std::path::PathBuf;

use clap::Args;

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_service::PickedFile;

use crate::output::{self, FileRow, OutputFormat};

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Files to upload. Only the first is stored.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Execute the upload command
pub async fn execute(
    args: &UploadArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut view = super::open_uploader(config).await?;

    let Some(path) = args.files.first() else {
        return Ok(());
    };
    if args.files.len() > 1 {
        output::print_warning(&format!(
            "Only the first file is uploaded; ignoring {} more.",
            args.files.len() - 1
        ));
    }

    let picked = match PickedFile::from_path(path).await {
        Ok(picked) => picked,
        Err(e) => {
            output::print_error(&format!("Cannot read '{}': {}", path.display(), e.message));
            return Err(e);
        }
    };

    view.drag_enter();
    let id = view
        .drop_files(vec![picked])
        .await
        .map_err(|e| super::report(&view, e))?;
    let Some(id) = id else {
        return Ok(());
    };

    let link = view.links().link_for(id);
    match view.state().find(id) {
        Some(record) => match format {
            OutputFormat::Table => {
                output::print_success(&format!(
                    "Uploaded '{}' ({})",
                    record.display_name,
                    record.display_size()
                ));
                output::print_kv("ID", &id.to_string());
                output::print_kv("Link", &link);
            }
            OutputFormat::Json => output::print_json(&FileRow::new(record, false)),
        },
        None => {
            // Stored, but the reload failed and its notice says so.
            if let Some(notice) = &view.state().notice {
                output::print_warning(&notice.message);
            }
            output::print_success(&format!("Uploaded as {id}"));
            output::print_kv("Link", &link);
        }
    }

    Ok(())
}
