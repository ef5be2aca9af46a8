//! Route guards deciding whether a navigation renders, redirects, or is
//! blocked behind the feature-locked overlay.
//!
//! DESIGN
//! ======
//! Each guard is a pure function of the session snapshot and the navigation
//! target, returning a [`GuardDecision`]. The Leptos wrappers in
//! `components::guards` only translate decisions into views, so every rule
//! here is unit-testable without a browser.
//!
//! A route's guards always run in the fixed order Auth, Admin, Subscription,
//! and the first non-`Render` decision wins. The admin guard is the only
//! asynchronous one; while its check is in flight the chain is pending and
//! nothing from the page is rendered.

use leptos_router::params::ParamsMap;

pub mod admin;
pub mod auth;
pub mod subscription;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use crate::state::session::Session;

pub use admin::AdminAccess;
pub use subscription::FeatureGate;

/// Guard attached to a route entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    Auth,
    Admin,
    Subscription(FeatureGate),
}

impl GuardKind {
    /// Position in the evaluation order.
    const fn rank(self) -> u8 {
        match self {
            Self::Auth => 0,
            Self::Admin => 1,
            Self::Subscription(_) => 2,
        }
    }
}

/// Why a guard sent the user elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    NotAuthenticated,
    Unverified,
    NotAdmin { error: Option<String> },
}

/// Redirect target plus the context the destination page may use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    /// Path the user was trying to reach.
    pub from: String,
    pub reason: RedirectReason,
}

/// Output contract shared by every guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectTo(Redirect),
    /// Render the page beneath the non-dismissible upgrade overlay.
    ShowOverlay(FeatureGate),
}

/// The navigation being guarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    /// `verified=true` was present in the query string.
    pub verified_param: bool,
}

impl Navigation {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), verified_param: false }
    }

    /// Build from a path and the router's decoded query map.
    pub fn from_parts(path: impl Into<String>, query: &ParamsMap) -> Self {
        Self { path: path.into(), verified_param: query.get_str("verified") == Some("true") }
    }
}

/// Run `guards` against the session in the fixed Auth, Admin, Subscription
/// order.
///
/// Returns `None` while the admin check is still loading; callers render a
/// spinner and nothing else in that case.
pub fn evaluate_chain(
    guards: &[GuardKind],
    session: &Session,
    nav: &Navigation,
    admin: &AdminAccess,
) -> Option<GuardDecision> {
    let mut ordered = guards.to_vec();
    ordered.sort_by_key(|g| g.rank());

    for guard in ordered {
        let decision = match guard {
            GuardKind::Auth => auth::require_auth(session, nav),
            GuardKind::Admin => admin.decision(nav)?,
            GuardKind::Subscription(gate) => subscription::require_subscription(session, gate),
        };
        if decision != GuardDecision::Render {
            return Some(decision);
        }
    }
    Some(GuardDecision::Render)
}

/// Whether a chain needs the asynchronous admin check at all.
pub fn needs_admin_check(guards: &[GuardKind]) -> bool {
    guards.contains(&GuardKind::Admin)
}
