//! Share link command.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_core::types::FileId;
use dropshare_service::UploaderView;

use crate::output;

/// Arguments for the link command
#[derive(Debug, Args)]
pub struct LinkArgs {
    /// File ID
    pub id: String,
    /// Stay until the "copied" marker expires, then report it cleared
    #[arg(short, long)]
    pub wait: bool,
}

/// Execute the link command
pub async fn execute(args: &LinkArgs, config: &AppConfig) -> Result<(), AppError> {
    let id = super::parse_id(&args.id)?;
    let clipboard = Arc::new(super::system_clipboard(config));
    let mut view = super::open_uploader_with(config, clipboard.clone()).await?;
    super::require_listed(&view, id)?;

    match view.copy_link(id) {
        Ok(link) => {
            output::print_success("Copied!");
            println!("{link}");
        }
        Err(e) => {
            let e = super::report(&view, e);
            output::print_kv("Link", &view.links().link_for(id));
            return Err(e);
        }
    }

    if args.wait {
        let hold = Duration::from_millis(config.share.copied_indicator_ms);
        if outlast_marker(&view, id, hold).await {
            output::print_success("Copied marker cleared");
        }
    }

    if clipboard.serving() > 0 {
        output::print_warning("Holding the link on the clipboard until it is pasted over.");
    }
    let _ = tokio::task::spawn_blocking(move || clipboard.finish()).await;

    Ok(())
}

/// Sleep past the marker's hold and report whether it has cleared.
async fn outlast_marker(view: &UploaderView, id: FileId, hold: Duration) -> bool {
    // Margin past the hold so the clearing task has run.
    tokio::time::sleep(hold + Duration::from_millis(50)).await;
    !view.is_copied(id)
}
