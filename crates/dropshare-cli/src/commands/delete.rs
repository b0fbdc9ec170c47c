//! Delete command.

use clap::Args;

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_core::traits::{AssumeYes, ConfirmPrompt};

use crate::output;
use crate::prompt::DialoguerConfirm;

/// Arguments for the delete command
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// File ID
    pub id: String,
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the delete command
pub async fn execute(args: &DeleteArgs, config: &AppConfig) -> Result<(), AppError> {
    let id = super::parse_id(&args.id)?;
    let mut view = super::open_uploader(config).await?;
    super::require_listed(&view, id)?;

    let prompt: &dyn ConfirmPrompt = if args.yes { &AssumeYes } else { &DialoguerConfirm };

    let deleted = view
        .delete(id, prompt)
        .await
        .map_err(|e| super::report(&view, e))?;

    if deleted {
        output::print_success(&format!("Deleted {id}"));
    } else {
        println!("Cancelled.");
    }

    Ok(())
}
