//! Integration tests for the upload, rename, share, and delete lifecycle.

mod helpers;

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use dropshare_core::traits::{AssumeYes, ConfirmPrompt};
use dropshare_core::result::AppResult;
use dropshare_entity::file::MimeType;
use dropshare_service::{NoticeKind, PickedFile, UploaderView};

struct Decline;

impl ConfirmPrompt for Decline {
    fn confirm(&self, _message: &str) -> AppResult<bool> {
        Ok(false)
    }
}

#[tokio::test]
async fn test_full_lifecycle() {
    let app = helpers::TestApp::new();
    let mut view = app.uploader();

    view.mount().await.expect("mount");
    assert!(view.state().is_empty());

    // Upload
    view.drag_enter();
    assert!(view.state().drag_active);
    let id = view
        .drop_files(vec![helpers::picked("photo.png", "image/png", 204_800)])
        .await
        .expect("upload")
        .expect("one file processed");
    assert!(!view.state().drag_active);
    assert!(!view.state().uploading);
    assert!(view.state().notice.is_none());

    let top = &view.files()[0];
    assert_eq!(top.id, id);
    assert_eq!(top.display_name, "photo.png");
    assert_eq!(top.mime_type, MimeType::Png);
    assert_eq!(top.display_size(), "200.0 KB");
    assert!(top.content.starts_with("data:image/png;base64,"));

    // Rename
    let buffer = view.begin_rename(id).expect("editor opens");
    assert_eq!(buffer.text, "photo.png");
    view.edit_rename("vacation.png");
    assert!(view.commit_rename().await.expect("rename"));
    assert!(view.state().editing.is_none());
    assert_eq!(view.files()[0].display_name, "vacation.png");
    assert_eq!(app.stored().await[0].display_name, "vacation.png");

    // Share
    let link = view.copy_link(id).expect("copy link");
    assert_eq!(link, format!("{}/#/view/{id}", helpers::ORIGIN));
    assert_eq!(app.clipboard.contents().as_deref(), Some(link.as_str()));
    assert!(view.is_copied(id));

    // Delete
    assert!(view.delete(id, &AssumeYes).await.expect("delete"));
    assert!(view.files().is_empty());
    assert!(view.state().is_empty());
    assert!(app.stored().await.is_empty());
    assert!(!view.is_copied(id));
}

#[tokio::test(start_paused = true)]
async fn test_one_copied_marker_at_a_time() {
    let app = helpers::TestApp::new();
    let first = app.seed("a.png", MimeType::Png).await;
    let second = app.seed("b.pdf", MimeType::Pdf).await;
    let mut view = app.uploader();
    view.mount().await.expect("mount");

    view.copy_link(first).expect("copy first");
    view.copy_link(second).expect("copy second");
    assert!(!view.is_copied(first));
    assert!(view.is_copied(second));
    assert_eq!(view.copied(), Some(second));
    assert_eq!(
        app.clipboard.contents(),
        Some(format!("{}/#/view/{second}", helpers::ORIGIN))
    );

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(view.is_copied(second));

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(view.copied(), None);
}

#[tokio::test]
async fn test_newest_upload_is_listed_first() {
    let app = helpers::TestApp::new();
    let mut view = app.uploader();
    view.mount().await.expect("mount");

    let older = view
        .upload(helpers::picked("a.pdf", "application/pdf", 100))
        .await
        .expect("upload");
    let newer = view
        .upload(helpers::picked("b.svg", "image/svg+xml", 100))
        .await
        .expect("upload");

    let ids: Vec<_> = view.files().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![newer, older]);
}

#[tokio::test]
async fn test_only_first_picked_file_is_uploaded() {
    let app = helpers::TestApp::new();
    let mut view = app.uploader();
    view.mount().await.expect("mount");

    view.pick_files(vec![
        helpers::picked("one.png", "image/png", 10),
        helpers::picked("two.png", "image/png", 10),
    ])
    .await
    .expect("upload");

    let stored = app.stored().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].display_name, "one.png");

    assert_eq!(view.pick_files(Vec::new()).await.expect("no-op"), None);
}

#[tokio::test]
async fn test_upload_from_disk() {
    let app = helpers::TestApp::new();
    let mut view = app.uploader();
    view.mount().await.expect("mount");

    let mut tmp = tempfile::Builder::new()
        .prefix("report")
        .suffix(".pdf")
        .tempfile()
        .expect("tempfile");
    tmp.write_all(b"%PDF-1.7\n").expect("write");

    let file = PickedFile::from_path(tmp.path()).await.expect("picked");
    let id = view.upload(file).await.expect("upload");

    let record = view.state().find(id).expect("listed");
    assert_eq!(record.mime_type, MimeType::Pdf);
    assert_eq!(record.size_bytes, 9);
}

#[tokio::test]
async fn test_rejected_type_writes_nothing() {
    let app = helpers::TestApp::new();
    let mut view = app.uploader();
    view.mount().await.expect("mount");

    let err = view
        .upload(helpers::picked("anim.gif", "image/gif", 10))
        .await
        .expect_err("gif rejected");
    assert!(err.is_validation());

    let notice = view.state().notice.as_ref().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Validation);
    assert!(notice.message.contains("SVG, JPEG, PNG, or PDF"));
    assert!(app.stored().await.is_empty());
}

#[tokio::test]
async fn test_size_ceiling_is_inclusive() {
    let app = helpers::TestApp::new();
    let mut view = app.uploader();
    view.mount().await.expect("mount");
    let ceiling = app.config.upload.max_file_size_bytes as usize;

    view.upload(helpers::picked("fits.jpg", "image/jpeg", ceiling))
        .await
        .expect("at ceiling");

    let err = view
        .upload(helpers::picked("big.jpg", "image/jpeg", ceiling + 1))
        .await
        .expect_err("over ceiling");
    assert!(err.is_validation());
    let notice = view.state().notice.as_ref().expect("notice");
    assert!(notice.message.starts_with("File is too large"));
    assert!(notice.message.ends_with("Maximum size is 750.0 KB."));
    assert_eq!(app.stored().await.len(), 1);
}

#[tokio::test]
async fn test_blank_rename_keeps_name() {
    let app = helpers::TestApp::new();
    let id = app.seed("keep.png", MimeType::Png).await;
    let mut view = app.uploader();
    view.mount().await.expect("mount");

    view.begin_rename(id).expect("editor opens");
    view.edit_rename("   ");
    assert!(!view.commit_rename().await.expect("no-op"));
    assert!(view.state().editing.is_none());
    assert_eq!(app.stored().await[0].display_name, "keep.png");
}

#[tokio::test]
async fn test_escape_discards_and_blur_commits() {
    let app = helpers::TestApp::new();
    let id = app.seed("draft.pdf", MimeType::Pdf).await;
    let mut view = app.uploader();
    view.mount().await.expect("mount");

    view.begin_rename(id).expect("editor opens");
    view.edit_rename("discarded.pdf");
    view.cancel_rename();
    assert_eq!(app.stored().await[0].display_name, "draft.pdf");

    view.begin_rename(id).expect("editor opens");
    view.edit_rename("final.pdf");
    assert!(view.blur_rename().await.expect("blur commits"));
    assert_eq!(app.stored().await[0].display_name, "final.pdf");
}

#[tokio::test]
async fn test_declined_delete_keeps_record() {
    let app = helpers::TestApp::new();
    let id = app.seed("stay.png", MimeType::Png).await;
    let mut view = app.uploader();
    view.mount().await.expect("mount");

    assert!(!view.delete(id, &Decline).await.expect("declined"));
    assert_eq!(view.files().len(), 1);
    assert_eq!(app.stored().await.len(), 1);
}

#[tokio::test]
async fn test_unreachable_store_surfaces_notices() {
    let app = helpers::TestApp::new();
    let mut view = UploaderView::new(
        Arc::new(helpers::DownStore),
        Arc::clone(&app.clipboard) as Arc<dyn dropshare_core::traits::Clipboard>,
        &app.config,
    );

    assert!(view.mount().await.is_err());
    let notice = view.state().notice.clone().expect("load notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Failed to load files.");
    assert!(!view.state().loading);

    let err = view
        .upload(helpers::picked("photo.png", "image/png", 10))
        .await
        .expect_err("create fails");
    assert!(!err.is_validation());
    assert_eq!(
        view.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Failed to upload file. Please try again.")
    );
    assert!(!view.state().uploading);
    assert!(view.files().is_empty());
}
