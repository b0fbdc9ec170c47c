//! Integration tests for opening shared links in the viewer.

mod helpers;

use std::sync::Arc;

use dropshare_core::types::FileId;
use dropshare_database::store::DocumentStore;
use dropshare_entity::file::MimeType;
use dropshare_service::{HashRouter, Rendition, Route, Viewer, ViewerState, decode_data_url};

fn viewer_for(app: &helpers::TestApp, link: &str) -> Viewer {
    let router = HashRouter::start(link);
    let Route::View { id } = router.current() else {
        panic!("{link} did not route to the viewer");
    };
    Viewer::new(Arc::clone(&app.store) as Arc<dyn DocumentStore>, id.clone())
}

#[tokio::test]
async fn test_copied_link_opens_uploaded_image() {
    let app = helpers::TestApp::new();
    let mut view = app.uploader();
    view.mount().await.expect("mount");
    let id = view
        .upload(helpers::picked("photo.png", "image/png", 64))
        .await
        .expect("upload");
    let link = view.copy_link(id).expect("copy link");

    let mut viewer = viewer_for(&app, &link);
    match viewer.load().await {
        ViewerState::Found { record, rendition } => {
            assert_eq!(record.id, id);
            let Rendition::Image { src, alt } = rendition else {
                panic!("expected image rendition, got {rendition:?}");
            };
            assert_eq!(alt, "photo.png");
            let payload = decode_data_url(src).expect("decode");
            assert_eq!(payload.mime_type, "image/png");
            assert_eq!(payload.data, vec![0x5a; 64]);
        }
        other => panic!("expected found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_pdf_opens_as_document() {
    let app = helpers::TestApp::new();
    let id = app.seed("notes.pdf", MimeType::Pdf).await;

    let mut viewer = viewer_for(&app, &format!("#/view/{id}"));
    let state = viewer.load().await;
    assert!(matches!(
        state,
        ViewerState::Found {
            rendition: Rendition::Document { .. },
            ..
        }
    ));
    assert!(state.home_link().is_none());
}

#[tokio::test]
async fn test_vector_image_has_no_preview() {
    let app = helpers::TestApp::new();
    let id = app.seed("logo.svg", MimeType::Svg).await;

    let mut viewer = viewer_for(&app, &format!("#/view/{id}"));
    let state = viewer.load().await;
    assert!(matches!(state, ViewerState::Error { .. }));
    assert_eq!(state.home_link().as_deref(), Some("#/"));
}

#[tokio::test]
async fn test_deleted_file_is_not_found() {
    let app = helpers::TestApp::new();
    let id = app.seed("gone.png", MimeType::Png).await;
    app.store.delete(id).await.expect("delete");

    let mut viewer = viewer_for(&app, &format!("https://example.com/#/view/{id}"));
    let state = viewer.load().await;
    assert_eq!(state, &ViewerState::NotFound);
    assert!(state.message().is_some());
    assert_eq!(state.home_link().as_deref(), Some("#/"));
}

#[tokio::test]
async fn test_opaque_id_is_not_found() {
    let app = helpers::TestApp::new();
    let mut viewer = viewer_for(&app, "#/view/abc123");
    assert_eq!(viewer.id(), "abc123");
    assert_eq!(viewer.load().await, &ViewerState::NotFound);
}

#[tokio::test]
async fn test_unreachable_store_is_error_not_not_found() {
    let mut viewer = Viewer::new(Arc::new(helpers::DownStore), FileId::new().to_string());
    assert_eq!(viewer.state(), &ViewerState::Loading);

    let state = viewer.load().await;
    assert!(matches!(state, ViewerState::Error { .. }));
    assert!(state.is_terminal());
}
