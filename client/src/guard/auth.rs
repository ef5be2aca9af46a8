//! `RequireAuth`: token presence plus email verification.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::{GuardDecision, Navigation, Redirect, RedirectReason};
use crate::state::session::Session;

/// Where unauthenticated users land.
pub const SIGNED_OUT_REDIRECT: &str = "/";
/// Where signed-in but unverified users land.
pub const UNVERIFIED_REDIRECT: &str = "/resend-verification";

/// Decide whether an authenticated-only page may render.
///
/// A token with no loaded user still renders: the verification check only
/// applies once a user object exists. `verified=true` in the query lets a
/// just-verified user through before the profile flag has refreshed.
pub fn require_auth(session: &Session, nav: &Navigation) -> GuardDecision {
    if session.token.is_none() {
        return GuardDecision::RedirectTo(Redirect {
            to: SIGNED_OUT_REDIRECT,
            from: nav.path.clone(),
            reason: RedirectReason::NotAuthenticated,
        });
    }

    let unverified = session.user.as_ref().is_some_and(|u| !u.is_verified);
    if unverified && !nav.verified_param {
        return GuardDecision::RedirectTo(Redirect {
            to: UNVERIFIED_REDIRECT,
            from: nav.path.clone(),
            reason: RedirectReason::Unverified,
        });
    }

    GuardDecision::Render
}
