//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file layered under `DROPSHARE__*` environment
//! variables. Every field has a default, so an empty source still yields a
//! usable configuration.

pub mod database;
pub mod logging;
pub mod share;
pub mod store;
pub mod upload;

use serde::{Deserialize, Serialize};

pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::share::ShareConfig;
pub use self::store::StoreConfig;
pub use self::upload::UploadConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Intake limits.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Share link settings.
    #[serde(default)]
    pub share: ShareConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `DROPSHARE` and using `__` as the section separator override it,
    /// e.g. `DROPSHARE_STORE__PROVIDER=memory`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("DROPSHARE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject settings that would make the views misbehave.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.upload.max_file_size_bytes == 0 {
            return Err(AppError::configuration(
                "upload.max_file_size_bytes must be greater than zero",
            ));
        }
        if !self.share.base_path.starts_with('/') {
            return Err(AppError::configuration(format!(
                "share.base_path must start with '/', got '{}'",
                self.share.base_path
            )));
        }
        if self.share.origin.ends_with('/') {
            return Err(AppError::configuration(format!(
                "share.origin must not end with '/', got '{}'",
                self.share.origin
            )));
        }
        Ok(())
    }
}
