use std::collections::HashSet;

use super::*;

fn route(path: &str) -> &'static RouteEntry {
    match resolve(path) {
        Resolved::Route(entry) => entry,
        other => panic!("expected route for {path}, got {other:?}"),
    }
}

// =============================================================
// Table integrity
// =============================================================

#[test]
fn route_paths_are_unique() {
    let mut seen = HashSet::new();
    for entry in ROUTES {
        assert!(seen.insert(entry.path), "duplicate route {}", entry.path);
    }
}

#[test]
fn aliases_point_at_declared_routes() {
    for (from, to) in REDIRECT_ALIASES {
        assert!(ROUTES.iter().any(|r| r.path == *to), "alias {from} -> {to} has no target");
        assert!(ROUTES.iter().all(|r| r.path != *from), "alias {from} shadows a route");
    }
}

#[test]
fn seo_variants_do_not_shadow_routes_or_aliases() {
    for variant in seo::routes() {
        assert!(ROUTES.iter().all(|r| r.path != variant.path), "{}", variant.path);
        assert!(REDIRECT_ALIASES.iter().all(|(from, _)| *from != variant.path), "{}", variant.path);
    }
}

// =============================================================
// Guard assignments
// =============================================================

#[test]
fn subscription_pages_carry_auth_and_feature_gate() {
    let cases = [
        ("/settings/connected-accounts", "Integrations"),
        ("/settings/scheduled-content", "Scheduled Posts"),
        ("/create/video", "Create Video"),
        ("/motion-capture", "Motion Capture"),
    ];
    for (path, feature) in cases {
        let entry = route(path);
        assert!(entry.guards.contains(&GuardKind::Auth), "{path}");
        assert!(
            entry.guards.iter().any(|g| matches!(g, GuardKind::Subscription(gate) if gate.name == feature)),
            "{path}"
        );
    }
}

#[test]
fn create_music_is_auth_only() {
    assert_eq!(route("/create/music").guards, &[GuardKind::Auth]);
}

#[test]
fn admin_email_is_admin_only() {
    assert_eq!(route("/admin/email").guards, &[GuardKind::Admin]);
}

#[test]
fn oauth_callbacks_are_unguarded() {
    for path in ["/oauth/youtube/callback", "/oauth/tiktok/callback", "/auth/google/callback"] {
        assert!(route(path).guards.is_empty(), "{path}");
    }
}

#[test]
fn public_marketing_pages_are_unguarded() {
    for path in ["/", "/pricing", "/docs", "/faq", "/terms", "/privacy"] {
        assert!(route(path).guards.is_empty(), "{path}");
    }
}

#[test]
fn each_locked_route_raises_its_own_overlay() {
    use crate::guard::fixtures::signed_in;
    use crate::guard::{AdminAccess, GuardDecision, Navigation, evaluate_chain};
    use crate::net::types::SubscriptionStatus;

    // Trialing on the free tier: no paywall, no paid plan.
    let session = signed_in(Some("free"), SubscriptionStatus::Trialing);
    let locked: Vec<_> = ROUTES
        .iter()
        .filter_map(|r| {
            r.guards.iter().find_map(|g| match g {
                GuardKind::Subscription(gate) => Some((r, *gate)),
                _ => None,
            })
        })
        .collect();
    assert_eq!(locked.len(), 4);

    for (entry, gate) in locked {
        let decision = evaluate_chain(entry.guards, &session, &Navigation::new(entry.path), &AdminAccess::Loading);
        assert_eq!(decision, Some(GuardDecision::ShowOverlay(gate)), "{}", entry.path);
    }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_alias_redirects() {
    assert_eq!(resolve("/dashboard"), Resolved::Redirect("/my-music"));
    assert_eq!(resolve("/characters"), Resolved::Redirect("/ai-assets"));
}

#[test]
fn resolve_strips_trailing_slash_and_query() {
    assert_eq!(route("/my-music/").page, Page::MyMusic);
    assert_eq!(route("/my-music?verified=true").page, Page::MyMusic);
}

#[test]
fn resolve_seo_variant_renders_landing_with_metadata() {
    let Resolved::Landing(Some(variant)) = resolve("/ai-rap-generator") else {
        panic!("expected SEO landing");
    };
    assert_eq!(variant.path, "/ai-rap-generator");
}

#[test]
fn unknown_paths_fall_back_to_landing() {
    for path in ["/nope", "/my-music/extra", "/admin/email/x", "/%20", "//"] {
        assert_eq!(resolve(path), Resolved::Landing(None), "{path}");
    }
}

#[test]
fn empty_path_is_landing() {
    assert_eq!(resolve(""), Resolved::Landing(None));
}

#[test]
fn normalize_keeps_root() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("/docs/#install"), "/docs");
}

// =============================================================
// indexable_paths
// =============================================================

#[test]
fn indexable_paths_include_marketing_and_variants_only() {
    let paths = indexable_paths();
    assert!(paths.contains(&"/"));
    assert!(paths.contains(&"/pricing"));
    assert!(paths.contains(&"/ai-music-generator"));
    assert!(!paths.contains(&"/my-music"));
    assert!(!paths.contains(&"/login"));
    assert_eq!(paths.len(), 6 + seo::routes().len());
}
