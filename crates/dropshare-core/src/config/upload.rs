//! Upload intake configuration.

use serde::{Deserialize, Serialize};

/// Limits applied to a picked file before anything is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Largest accepted file, in bytes.
    ///
    /// The encoded payload is stored inline in the record, and base64
    /// grows it by a third, so this stays well under the store's
    /// per-document ceiling.
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

fn default_max_file_size() -> u64 {
    750 * 1024
}
