//! The uploader view: intake, file list, rename, delete, and share.

pub mod intake;
pub mod state;
pub mod view;

pub use intake::IntakePolicy;
pub use state::{Notice, NoticeKind, RenameBuffer, UploaderState};
pub use view::UploaderView;
