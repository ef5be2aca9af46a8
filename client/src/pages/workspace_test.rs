use super::*;
use crate::routing::ROUTES;

#[test]
fn every_guarded_route_has_copy() {
    for entry in ROUTES.iter().filter(|r| !r.guards.is_empty()) {
        assert!(workspace_copy(entry.page).is_some(), "{} has no workspace copy", entry.path);
    }
}

#[test]
fn public_pages_have_no_copy() {
    assert_eq!(workspace_copy(Page::Landing), None);
    assert_eq!(workspace_copy(Page::Login), None);
}

#[test]
fn banner_names_known_providers_only() {
    assert_eq!(connected_banner(Some("youtube")).as_deref(), Some("YouTube account connected."));
    assert_eq!(connected_banner(Some("tiktok")).as_deref(), Some("TikTok account connected."));
    assert_eq!(connected_banner(Some("myspace")), None);
    assert_eq!(connected_banner(None), None);
}
