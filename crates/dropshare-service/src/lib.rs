//! # dropshare-service
//!
//! The view layer of DropShare, independent of any particular front end.
//! The [`router`] picks a view from a URL fragment; the
//! [`uploader::UploaderView`] owns the file list and drives every mutation
//! through the document store; the [`viewer::Viewer`] performs a single
//! read and renders the result.
//!
//! Views receive the store client at construction and never reach for a
//! global handle.

pub mod encoder;
pub mod router;
pub mod share;
pub mod uploader;
pub mod viewer;

pub use encoder::{
    DecodedPayload, EncodedFile, FileSource, PickedFile, decode_data_url, encode_data_url,
    encode_file,
};
pub use router::{HashRouter, Route};
pub use share::{CopiedIndicator, MemoryClipboard, ShareLinkBuilder};
pub use uploader::{IntakePolicy, Notice, NoticeKind, RenameBuffer, UploaderState, UploaderView};
pub use viewer::{Rendition, Viewer, ViewerState};
