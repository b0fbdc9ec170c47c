//! Single-file viewer.
//!
//! `Loading` moves exactly once to `Found`, `NotFound`, or `Error`, and
//! stays there. Raster images render as an image, PDFs as an embedded
//! document. Any other accepted type has no preview and ends in `Error`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use dropshare_core::types::FileId;
use dropshare_database::store::DocumentStore;
use dropshare_entity::file::{FileRecord, MimeType};

use crate::router::Route;

const NOT_FOUND_MESSAGE: &str = "File not found. It may have been deleted.";
const LOAD_ERROR_MESSAGE: &str = "Something went wrong while loading this file.";
const NO_PREVIEW_MESSAGE: &str = "Preview is not available for this file type.";

/// How a found record is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendition {
    /// Shown as an image, with the payload as its source.
    Image {
        /// Encoded payload.
        src: String,
        /// Alternative text.
        alt: String,
    },
    /// Shown in an embedded document frame.
    Document {
        /// Encoded payload.
        src: String,
        /// Frame title.
        title: String,
    },
}

/// Viewer state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerState {
    /// The fetch has not completed.
    Loading,
    /// The record exists and has a rendition.
    Found {
        /// The fetched record.
        record: FileRecord,
        /// How to present it.
        rendition: Rendition,
    },
    /// No record has this id.
    NotFound,
    /// The fetch failed, or the record cannot be previewed.
    Error {
        /// Message shown to the user.
        message: String,
    },
}

impl ViewerState {
    /// Whether the state is final.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Text for the error view, if this is one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::Error { message } => Some(message),
            Self::Loading | Self::Found { .. } => None,
        }
    }

    /// Link offered by the error view to get back home.
    pub fn home_link(&self) -> Option<String> {
        self.message().map(|_| Route::Home.fragment())
    }
}

/// Fetches one record and renders it.
pub struct Viewer {
    store: Arc<dyn DocumentStore>,
    id: String,
    state: ViewerState,
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("id", &self.id)
            .field("state", &self.state)
            .finish()
    }
}

impl Viewer {
    /// Creates a viewer for the id taken from the route.
    pub fn new(store: Arc<dyn DocumentStore>, id: impl Into<String>) -> Self {
        Self {
            store,
            id: id.into(),
            state: ViewerState::Loading,
        }
    }

    /// The id this viewer was opened with.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current state.
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Fetch and render. Only the first call touches the store.
    pub async fn load(&mut self) -> &ViewerState {
        if self.state.is_terminal() {
            return &self.state;
        }

        self.state = match self.id.parse::<FileId>() {
            Err(_) => {
                debug!(id = %self.id, "Viewer id is not a valid file id");
                ViewerState::NotFound
            }
            Ok(id) => match self.store.get_by_id(id).await {
                Ok(Some(record)) => render(record),
                Ok(None) => {
                    info!(file_id = %id, "Viewed file does not exist");
                    ViewerState::NotFound
                }
                Err(e) => {
                    warn!(file_id = %id, error = %e, "Failed to load viewed file");
                    ViewerState::Error {
                        message: LOAD_ERROR_MESSAGE.to_string(),
                    }
                }
            },
        };

        &self.state
    }
}

fn render(record: FileRecord) -> ViewerState {
    let rendition = if record.mime_type.is_raster_image() {
        Rendition::Image {
            src: record.content.clone(),
            alt: record.display_name.clone(),
        }
    } else if record.mime_type == MimeType::Pdf {
        Rendition::Document {
            src: record.content.clone(),
            title: record.display_name.clone(),
        }
    } else {
        info!(file_id = %record.id, mime_type = %record.mime_type, "No preview for file type");
        return ViewerState::Error {
            message: NO_PREVIEW_MESSAGE.to_string(),
        };
    };

    ViewerState::Found { record, rendition }
}
