//! CLI command definitions and dispatch.

pub mod config;
pub mod delete;
pub mod link;
pub mod list;
pub mod migrate;
pub mod open;
pub mod rename;
pub mod upload;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_core::result::AppResult;
use dropshare_core::traits::Clipboard;
use dropshare_core::types::FileId;
use dropshare_database::StoreManager;
use dropshare_database::store::DocumentStore;
use dropshare_service::UploaderView;

use crate::clipboard::ArboardClipboard;
use crate::output::{self, OutputFormat};

/// DropShare: upload, share, and view small files
#[derive(Debug, Parser)]
#[command(name = "dropshare", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "DROPSHARE_CONFIG", default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upload a file (only the first of several is stored)
    Upload(upload::UploadArgs),
    /// List uploaded files, newest first
    List,
    /// Rename a file
    Rename(rename::RenameArgs),
    /// Delete a file after confirmation
    Delete(delete::DeleteArgs),
    /// Copy a file's share link to the clipboard
    Link(link::LinkArgs),
    /// Open a share link or route fragment
    Open(open::OpenArgs),
    /// Run PostgreSQL migrations
    Migrate,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command against an already-loaded configuration.
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Upload(args) => upload::execute(args, config, self.format).await,
            Commands::List => list::execute(config, self.format).await,
            Commands::Rename(args) => rename::execute(args, config).await,
            Commands::Delete(args) => delete::execute(args, config).await,
            Commands::Link(args) => link::execute(args, config).await,
            Commands::Open(args) => open::execute(args, config, self.format).await,
            Commands::Migrate => migrate::execute(config).await,
            Commands::Config(args) => config::execute(args, config, self.format).await,
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: build the configured store client
pub async fn open_store(config: &AppConfig) -> AppResult<Arc<dyn DocumentStore>> {
    let manager = StoreManager::new(&config.store).await?;
    Ok(manager.store())
}

/// Helper: build and mount the uploader view on the system clipboard
pub async fn open_uploader(config: &AppConfig) -> AppResult<UploaderView> {
    open_uploader_with(config, Arc::new(system_clipboard(config))).await
}

/// Helper: build and mount the uploader view on `clipboard`
pub async fn open_uploader_with(
    config: &AppConfig,
    clipboard: Arc<dyn Clipboard>,
) -> AppResult<UploaderView> {
    let store = open_store(config).await?;
    let mut view = UploaderView::new(store, clipboard, config);
    view.mount().await.map_err(|e| report(&view, e))?;
    Ok(view)
}

/// Helper: the desktop clipboard with the configured hold window
pub fn system_clipboard(config: &AppConfig) -> ArboardClipboard {
    ArboardClipboard::new(Duration::from_millis(config.share.clipboard_hold_ms))
}

/// Print the view's notice, if any, and hand the error back.
pub fn report(view: &UploaderView, err: AppError) -> AppError {
    if let Some(notice) = &view.state().notice {
        output::print_error(&notice.message);
    }
    err
}

/// Parse a file id given on the command line.
pub fn parse_id(raw: &str) -> AppResult<FileId> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("'{raw}' is not a valid file id")))
}

/// Require `id` to be in the mounted list, as the row actions do.
pub fn require_listed(view: &UploaderView, id: FileId) -> AppResult<()> {
    if view.state().find(id).is_none() {
        let err = AppError::not_found(format!("No file with id {id}"));
        output::print_error(&err.message);
        return Err(err);
    }
    Ok(())
}
