//! Converts picked files into self-contained `data:` URLs and back.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use tracing::debug;

use dropshare_core::error::AppError;
use dropshare_core::result::AppResult;
use dropshare_entity::file::MimeType;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Where the bytes of a picked file come from.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// A file on local disk, read only when encoded.
    Path(PathBuf),
    /// Bytes already in memory.
    Bytes(Bytes),
}

/// A file handed to the uploader by drag-and-drop or the file picker.
///
/// The MIME type is whatever the picker reported; the intake decides
/// whether it is acceptable.
#[derive(Debug, Clone)]
pub struct PickedFile {
    /// Original file name.
    pub name: String,
    /// Reported MIME type.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Content source.
    pub source: FileSource,
}

impl PickedFile {
    /// Describe a file on disk. The MIME type is guessed from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(AppError::validation(format!(
                "'{}' is not a file",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(FALLBACK_MIME)
            .to_string();

        Ok(Self {
            name,
            mime_type,
            size_bytes: metadata.len(),
            source: FileSource::Path(path.to_path_buf()),
        })
    }

    /// Describe a file whose bytes are already in memory.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes: data.len() as u64,
            source: FileSource::Bytes(data),
        }
    }

    /// Read the full content.
    pub async fn read_bytes(&self) -> AppResult<Bytes> {
        match &self.source {
            FileSource::Path(path) => Ok(Bytes::from(tokio::fs::read(path).await?)),
            FileSource::Bytes(data) => Ok(data.clone()),
        }
    }
}

/// A picked file read once and encoded for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFile {
    /// `data:<mime>;base64,<payload>`.
    pub data_url: String,
    /// Length of the bytes that were actually read and encoded.
    pub size_bytes: u64,
}

/// Encode raw bytes as `data:<mime>;base64,<payload>`.
pub fn encode_data_url(mime_type: MimeType, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type.as_str(), STANDARD.encode(data))
}

/// Read `file` once and encode it under its validated MIME type.
///
/// The reported size is ignored; `size_bytes` is measured from the read.
/// Fails if the underlying read fails.
pub async fn encode_file(file: &PickedFile, mime_type: MimeType) -> AppResult<EncodedFile> {
    let data = file.read_bytes().await?;
    debug!(
        name = %file.name,
        reported = file.size_bytes,
        read = data.len(),
        "Encoding file as data URL"
    );
    Ok(EncodedFile {
        data_url: encode_data_url(mime_type, &data),
        size_bytes: data.len() as u64,
    })
}

/// Bytes recovered from a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    /// MIME type from the URL header.
    pub mime_type: String,
    /// Raw content.
    pub data: Vec<u8>,
}

/// Decode a base64 `data:` URL produced by [`encode_data_url`].
pub fn decode_data_url(url: &str) -> AppResult<DecodedPayload> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| AppError::validation("Payload is not a data URL"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| AppError::validation("Data URL has no payload separator"))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| AppError::validation("Data URL is not base64-encoded"))?;

    Ok(DecodedPayload {
        mime_type: mime_type.to_string(),
        data: STANDARD.decode(payload)?,
    })
}
