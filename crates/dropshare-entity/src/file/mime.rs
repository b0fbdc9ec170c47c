//! The closed set of accepted MIME types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A MIME type the intake accepts. Anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MimeType {
    /// `image/svg+xml`
    #[serde(rename = "image/svg+xml")]
    Svg,
    /// `image/jpeg`
    #[serde(rename = "image/jpeg")]
    Jpeg,
    /// `image/png`
    #[serde(rename = "image/png")]
    Png,
    /// `application/pdf`
    #[serde(rename = "application/pdf")]
    Pdf,
}

impl MimeType {
    /// Every accepted type, in the order they are listed to the user.
    pub const ALL: [MimeType; 4] = [Self::Svg, Self::Jpeg, Self::Png, Self::Pdf];

    /// Return the MIME type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Pdf => "application/pdf",
        }
    }

    /// Short label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Svg => "SVG",
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Pdf => "PDF",
        }
    }

    /// Raster images render directly as an image source.
    pub fn is_raster_image(&self) -> bool {
        matches!(self, Self::Jpeg | Self::Png)
    }

    /// Human list of accepted types, e.g. `SVG, JPEG, PNG, or PDF`.
    pub fn accepted_list() -> String {
        let labels: Vec<&str> = Self::ALL.iter().map(MimeType::label).collect();
        match labels.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
            Some((last, _)) => (*last).to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MimeType {
    type Err = dropshare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image/svg+xml" => Ok(Self::Svg),
            "image/jpeg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            "application/pdf" => Ok(Self::Pdf),
            _ => Err(dropshare_core::AppError::validation(format!(
                "Unsupported file type '{s}'. Please upload an {} file.",
                Self::accepted_list()
            ))),
        }
    }
}

impl TryFrom<String> for MimeType {
    type Error = dropshare_core::AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
