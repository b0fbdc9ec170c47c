//! DropShare: upload, share, and view small files from the terminal.
//!
//! Main entry point that loads configuration, initialises logging, and
//! dispatches the command line.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use dropshare_cli::Cli;
use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(kind = ?e.kind, "Command failed: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(config_path: &str) -> Result<AppConfig, AppError> {
    dropshare_cli::commands::load_config(config_path)
}

/// Initialize tracing/logging. Logs go to stderr so command output stays
/// machine-readable.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Run the selected command
async fn run(cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    tracing::debug!(
        store = %config.store.provider,
        "Starting DropShare v{}",
        env!("CARGO_PKG_VERSION")
    );
    cli.execute(config).await
}
