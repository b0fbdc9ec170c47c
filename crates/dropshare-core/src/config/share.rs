//! Share link configuration.

use serde::{Deserialize, Serialize};

/// Where share links point and how long the "copied" marker lasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Scheme, host, and port of the deployed viewer, without a trailing slash.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Path the viewer is served under, starting with `/`.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// How long a record shows as copied, in milliseconds.
    #[serde(default = "default_copied_indicator_ms")]
    pub copied_indicator_ms: u64,
    /// How long the terminal front end keeps serving a copied link on
    /// desktops where the clipboard empties when the owning process exits.
    #[serde(default = "default_clipboard_hold_ms")]
    pub clipboard_hold_ms: u64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            base_path: default_base_path(),
            copied_indicator_ms: default_copied_indicator_ms(),
            clipboard_hold_ms: default_clipboard_hold_ms(),
        }
    }
}

fn default_origin() -> String {
    "http://localhost:8080".to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_copied_indicator_ms() -> u64 {
    2000
}

fn default_clipboard_hold_ms() -> u64 {
    30_000
}
