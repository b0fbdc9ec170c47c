//! Integration tests for fragment routing and share links.

use dropshare_core::config::ShareConfig;
use dropshare_core::types::FileId;
use dropshare_service::{HashRouter, Route, ShareLinkBuilder};

#[test]
fn test_view_fragment_routes_to_viewer() {
    let router = HashRouter::start("http://localhost:8080/#/view/abc123");
    assert_eq!(
        router.current(),
        &Route::View {
            id: "abc123".to_string()
        }
    );
}

#[test]
fn test_everything_else_routes_home() {
    for url in [
        "http://localhost:8080/",
        "http://localhost:8080/#",
        "http://localhost:8080/#/",
        "http://localhost:8080/#/view/",
        "http://localhost:8080/#/settings",
    ] {
        assert_eq!(HashRouter::start(url).current(), &Route::Home, "{url}");
    }
}

#[test]
fn test_fragment_changes_switch_views() {
    let mut router = HashRouter::start("http://localhost:8080/");
    let id = FileId::new();

    assert_eq!(
        router.on_fragment_change(&Route::view(id).fragment()),
        &Route::view(id)
    );
    assert_eq!(router.on_fragment_change("#/"), &Route::Home);
}

#[test]
fn test_share_link_round_trips_through_router() {
    let links = ShareLinkBuilder::new("https://files.example.org", "/app/");
    let id = FileId::new();

    let link = links.link_for(id);
    assert_eq!(link, format!("https://files.example.org/app/#/view/{id}"));
    assert_eq!(HashRouter::start(&link).current(), &Route::view(id));
    assert_eq!(links.home(), "https://files.example.org/app/#/");
}

#[test]
fn test_default_links_point_at_localhost() {
    let links = ShareLinkBuilder::from_config(&ShareConfig::default());
    assert_eq!(links.home(), "http://localhost:8080/#/");
}
