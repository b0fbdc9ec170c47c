//! Open command: route a share link or fragment to the right view.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_service::{
    HashRouter, Rendition, Route, ShareLinkBuilder, Viewer, ViewerState, decode_data_url,
};

use crate::output::{self, OutputFormat};

/// Arguments for the open command
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Share link (`https://host/#/view/<id>`) or bare fragment (`#/view/<id>`)
    pub target: String,
    /// Save the file content here instead of only describing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// What the viewer found, as printed in JSON mode.
#[derive(Debug, Serialize)]
struct ViewSummary<'a> {
    id: String,
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    size: String,
    uploaded: String,
    rendition: &'static str,
}

/// Normalise user input to something the router can start from.
///
/// Anything without a `#` is treated as a bare fragment.
fn starting_url(target: &str) -> String {
    if target.contains('#') {
        target.to_string()
    } else {
        format!("#{target}")
    }
}

/// Execute the open command
pub async fn execute(
    args: &OpenArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let router = HashRouter::start(&starting_url(&args.target));

    let id = match router.current() {
        Route::Home => {
            let view = super::open_uploader(config).await?;
            super::list::print_files(&view, format);
            return Ok(());
        }
        Route::View { id } => id.clone(),
    };

    let store = super::open_store(config).await?;
    let mut viewer = Viewer::new(store, id);

    match viewer.load().await {
        ViewerState::Found { record, rendition } => {
            let (kind, src) = match rendition {
                Rendition::Image { src, .. } => ("image", src),
                Rendition::Document { src, .. } => ("document", src),
            };

            match format {
                OutputFormat::Table => {
                    output::print_kv("Name", &record.display_name);
                    output::print_kv("Type", record.mime_type.label());
                    output::print_kv("Size", &record.display_size());
                    output::print_kv(
                        "Uploaded",
                        &record.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    );
                    output::print_kv("Shown as", kind);
                }
                OutputFormat::Json => output::print_json(&ViewSummary {
                    id: record.id.to_string(),
                    name: &record.display_name,
                    kind: record.mime_type.as_str(),
                    size: record.display_size(),
                    uploaded: record.created_at.to_rfc3339(),
                    rendition: kind,
                }),
            }

            if let Some(path) = &args.output {
                let payload = decode_data_url(src)?;
                tokio::fs::write(path, &payload.data).await?;
                output::print_success(&format!(
                    "Saved {} bytes to '{}'",
                    payload.data.len(),
                    path.display()
                ));
            }
            Ok(())
        }
        state => {
            let message = state.message().unwrap_or_default().to_string();
            output::print_error(&message);
            let home = ShareLinkBuilder::from_config(&config.share).home();
            output::print_kv("Back", &home);

            Err(match state {
                ViewerState::NotFound => AppError::not_found(message),
                _ => AppError::internal(message),
            })
        }
    }
}
