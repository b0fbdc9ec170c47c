//! Validation applied to a picked file before anything is written.

use dropshare_core::config::UploadConfig;
use dropshare_core::error::AppError;
use dropshare_core::result::AppResult;
use dropshare_entity::file::{MimeType, format_size};

use crate::encoder::PickedFile;

/// Accepts a file only if its type is in the accepted set and it fits
/// under the size ceiling. Type is checked first.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    max_file_size_bytes: u64,
}

impl IntakePolicy {
    /// Creates a policy with the given ceiling.
    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
        }
    }

    /// Creates a policy from configuration.
    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(config.max_file_size_bytes)
    }

    /// The size ceiling in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    /// Validate `file`, returning its parsed MIME type.
    pub fn validate(&self, file: &PickedFile) -> AppResult<MimeType> {
        let mime_type: MimeType = file.mime_type.parse()?;
        self.check_size(file.size_bytes)?;
        Ok(mime_type)
    }

    /// Reject a byte count over the ceiling.
    ///
    /// Applied to the reported size at intake and again to the bytes
    /// actually read, which may differ if the file changed since it was picked.
    pub fn check_size(&self, size_bytes: u64) -> AppResult<()> {
        if size_bytes > self.max_file_size_bytes {
            return Err(AppError::validation(format!(
                "File is too large ({}). Maximum size is {}.",
                format_size(size_bytes),
                format_size(self.max_file_size_bytes)
            )));
        }
        Ok(())
    }
}
