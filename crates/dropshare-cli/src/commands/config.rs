//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_database::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let shown = masked(config);
            match format {
                OutputFormat::Json => output::print_json(&shown),
                OutputFormat::Table => {
                    output::print_kv("Store", &shown.store.provider);
                    output::print_kv("Collection", &shown.store.collection);
                    output::print_kv("Database", &shown.store.database.url);
                    output::print_kv(
                        "Max upload",
                        &dropshare_entity::file::format_size(shown.upload.max_file_size_bytes),
                    );
                    output::print_kv("Origin", &shown.share.origin);
                    output::print_kv("Base path", &shown.share.base_path);
                    output::print_kv(
                        "Copied for",
                        &format!("{} ms", shown.share.copied_indicator_ms),
                    );
                    output::print_kv(
                        "Logging",
                        &format!("{} ({})", shown.logging.level, shown.logging.format),
                    );
                }
            }
        }
    }

    Ok(())
}

/// Copy of `config` with the database password hidden.
fn masked(config: &AppConfig) -> AppConfig {
    let mut shown = config.clone();
    shown.store.database.url = mask_password(&shown.store.database.url);
    shown
}
