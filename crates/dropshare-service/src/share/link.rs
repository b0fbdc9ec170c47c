//! Share URL construction.

use dropshare_core::config::ShareConfig;
use dropshare_core::types::FileId;

use crate::router::Route;

/// Builds `<origin><base-path>#/view/<id>` links.
#[derive(Debug, Clone)]
pub struct ShareLinkBuilder {
    origin: String,
    base_path: String,
}

impl ShareLinkBuilder {
    /// Creates a link builder for the given origin and base path.
    pub fn new(origin: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            base_path: base_path.into(),
        }
    }

    /// Creates a link builder from configuration.
    pub fn from_config(config: &ShareConfig) -> Self {
        Self::new(&config.origin, &config.base_path)
    }

    /// The share link for a record.
    pub fn link_for(&self, id: FileId) -> String {
        format!(
            "{}{}{}",
            self.origin,
            self.base_path,
            Route::view(id).fragment()
        )
    }

    /// Link back to the home view.
    pub fn home(&self) -> String {
        format!("{}{}{}", self.origin, self.base_path, Route::Home.fragment())
    }
}
