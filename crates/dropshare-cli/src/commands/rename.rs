//! Rename command.

use clap::Args;

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;

use crate::output;
use crate::prompt;

/// Arguments for the rename command
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// File ID
    pub id: String,
    /// New display name. Omit to edit the current name interactively.
    pub name: Option<String>,
}

/// Execute the rename command
pub async fn execute(args: &RenameArgs, config: &AppConfig) -> Result<(), AppError> {
    let id = super::parse_id(&args.id)?;
    let mut view = super::open_uploader(config).await?;
    super::require_listed(&view, id)?;

    let current = view.begin_rename(id)?.text.clone();

    let text = match &args.name {
        Some(name) => name.clone(),
        None => match prompt::edit_name(&current) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                view.cancel_rename();
                println!("Cancelled.");
                return Ok(());
            }
            Err(e) => {
                view.cancel_rename();
                output::print_warning(&format!("Rename cancelled: {}", e.message));
                return Ok(());
            }
        },
    };

    view.edit_rename(text);
    let renamed = view
        .commit_rename()
        .await
        .map_err(|e| super::report(&view, e))?;

    match view.state().find(id) {
        Some(record) if renamed => {
            output::print_success(&format!("Renamed '{current}' to '{}'", record.display_name));
        }
        _ => output::print_warning("Name is empty; nothing changed."),
    }

    Ok(())
}
