//! Declarative route table.
//!
//! DESIGN
//! ======
//! The table maps URL paths to pages and the guards wrapping them. It is
//! static data; `resolve` is the only lookup and never fails: paths that
//! match neither a page, an alias, nor an SEO variant fall through to the
//! public landing page.

pub mod seo;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use crate::guard::{FeatureGate, GuardKind};
use crate::net::types::ConnectProvider;

/// Page components addressable from the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Pricing,
    Docs,
    Faq,
    Terms,
    Privacy,
    Login,
    Register,
    ResendVerification,
    GoogleCallback,
    ConnectCallback(ConnectProvider),
    MyMusic,
    MyVideos,
    Account,
    Settings,
    ConnectedAccounts,
    ScheduledContent,
    AiAssets,
    AiAssetsCreate,
    CreateMusic,
    CreateVideo,
    MotionCapture,
    AdminEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
    pub guards: &'static [GuardKind],
}

const AUTH: &[GuardKind] = &[GuardKind::Auth];
const ADMIN: &[GuardKind] = &[GuardKind::Admin];

pub const INTEGRATIONS: FeatureGate =
    FeatureGate::described("Integrations", "Connect YouTube and TikTok to publish straight from Cadenza.");
pub const SCHEDULED_POSTS: FeatureGate =
    FeatureGate::described("Scheduled Posts", "Queue songs and videos to go live on your channels automatically.");
pub const CREATE_VIDEO: FeatureGate =
    FeatureGate::described("Create Video", "Turn your tracks into music videos with AI visuals.");
pub const MOTION_CAPTURE: FeatureGate =
    FeatureGate::described("Motion Capture", "Animate your AI characters from a webcam performance.");

const fn public(path: &'static str, page: Page) -> RouteEntry {
    RouteEntry { path, page, guards: &[] }
}

const fn guarded(path: &'static str, page: Page, guards: &'static [GuardKind]) -> RouteEntry {
    RouteEntry { path, page, guards }
}

pub const ROUTES: &[RouteEntry] = &[
    public("/", Page::Landing),
    public("/pricing", Page::Pricing),
    public("/docs", Page::Docs),
    public("/faq", Page::Faq),
    public("/terms", Page::Terms),
    public("/privacy", Page::Privacy),
    public("/login", Page::Login),
    public("/register", Page::Register),
    public("/resend-verification", Page::ResendVerification),
    public("/auth/google/callback", Page::GoogleCallback),
    public("/oauth/youtube/callback", Page::ConnectCallback(ConnectProvider::YouTube)),
    public("/oauth/tiktok/callback", Page::ConnectCallback(ConnectProvider::TikTok)),
    guarded("/my-music", Page::MyMusic, AUTH),
    guarded("/my-videos", Page::MyVideos, AUTH),
    guarded("/account", Page::Account, AUTH),
    guarded("/settings", Page::Settings, AUTH),
    guarded(
        "/settings/connected-accounts",
        Page::ConnectedAccounts,
        &[GuardKind::Auth, GuardKind::Subscription(INTEGRATIONS)],
    ),
    guarded(
        "/settings/scheduled-content",
        Page::ScheduledContent,
        &[GuardKind::Auth, GuardKind::Subscription(SCHEDULED_POSTS)],
    ),
    guarded("/ai-assets", Page::AiAssets, AUTH),
    guarded("/ai-assets/create", Page::AiAssetsCreate, AUTH),
    guarded("/create/music", Page::CreateMusic, AUTH),
    guarded("/create/video", Page::CreateVideo, &[GuardKind::Auth, GuardKind::Subscription(CREATE_VIDEO)]),
    guarded("/motion-capture", Page::MotionCapture, &[GuardKind::Auth, GuardKind::Subscription(MOTION_CAPTURE)]),
    guarded("/admin/email", Page::AdminEmail, ADMIN),
];

/// Legacy and shorthand paths that redirect to a canonical route.
pub const REDIRECT_ALIASES: &[(&str, &str)] = &[
    ("/dashboard", "/my-music"),
    ("/music", "/my-music"),
    ("/songs", "/my-music"),
    ("/videos", "/my-videos"),
    ("/characters", "/ai-assets"),
    ("/characters/create", "/ai-assets/create"),
    ("/create", "/create/music"),
    ("/integrations", "/settings/connected-accounts"),
    ("/admin", "/admin/email"),
    ("/signup", "/register"),
];

/// Outcome of matching a path against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    Route(&'static RouteEntry),
    Redirect(&'static str),
    /// Landing page, with the SEO variant's metadata when one is registered.
    Landing(Option<&'static seo::SeoRoute>),
}

/// Strip a trailing slash (except on `/`) and any query or fragment.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 { path.trim_end_matches('/') } else { path }
}

/// Match `path` against routes, aliases, then SEO variants; anything else
/// is the landing page.
pub fn resolve(path: &str) -> Resolved {
    let path = normalize_path(path);
    if path.is_empty() {
        return Resolved::Landing(None);
    }
    if let Some(entry) = ROUTES.iter().find(|r| r.path == path) {
        return Resolved::Route(entry);
    }
    if let Some((_, to)) = REDIRECT_ALIASES.iter().find(|(from, _)| *from == path) {
        return Resolved::Redirect(*to);
    }
    Resolved::Landing(seo::lookup(path))
}

/// Publicly indexable paths: marketing pages plus every SEO variant.
pub fn indexable_paths() -> Vec<&'static str> {
    let marketing = ROUTES
        .iter()
        .filter(|r| matches!(r.page, Page::Landing | Page::Pricing | Page::Docs | Page::Faq | Page::Terms | Page::Privacy))
        .map(|r| r.path);
    let variants = seo::routes().iter().map(|r| r.path.as_str());
    marketing.chain(variants).collect()
}
