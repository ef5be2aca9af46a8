//! `RequireAdmin`: backend-confirmed elevated privileges.
//!
//! DESIGN
//! ======
//! Explicit three-state machine `Loading -> {Authorized, Unauthorized}`.
//! Every failure of the verification call collapses into `Unauthorized`,
//! so the guard fails closed. `AdminCheckTracker` stamps each check with a
//! generation so a response for a superseded token is ignored.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use super::{GuardDecision, Navigation, Redirect, RedirectReason};
use crate::net::api::{AdminVerifier, ApiError};
use crate::net::types::AdminCheckResult;

pub const UNAUTHORIZED_ACCESS: &str = "Unauthorized access";
pub const VALIDATION_FAILED: &str = "Error validating admin access";

/// Where non-admins land.
pub const NOT_ADMIN_REDIRECT: &str = "/";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AdminAccess {
    #[default]
    Loading,
    Authorized,
    Unauthorized {
        error: Option<String>,
    },
}

impl AdminAccess {
    /// Map the verification call outcome onto a terminal state.
    pub fn from_result(result: Result<AdminCheckResult, ApiError>) -> Self {
        match result {
            Ok(res) if res.is_admin => Self::Authorized,
            Ok(_) => Self::Unauthorized { error: Some(UNAUTHORIZED_ACCESS.to_owned()) },
            Err(e) => {
                log::warn!("admin validation failed: {e}");
                Self::Unauthorized { error: Some(VALIDATION_FAILED.to_owned()) }
            }
        }
    }

    /// Guard decision for this state; `None` while loading.
    pub fn decision(&self, nav: &Navigation) -> Option<GuardDecision> {
        match self {
            Self::Loading => None,
            Self::Authorized => Some(GuardDecision::Render),
            Self::Unauthorized { error } => Some(GuardDecision::RedirectTo(Redirect {
                to: NOT_ADMIN_REDIRECT,
                from: nav.path.clone(),
                reason: RedirectReason::NotAdmin { error: error.clone() },
            })),
        }
    }
}

/// Run one admin check for `token`. No token means no call.
pub async fn check_admin<V: AdminVerifier>(verifier: &V, token: Option<&str>) -> AdminAccess {
    match token {
        None => AdminAccess::Unauthorized { error: None },
        Some(token) => AdminAccess::from_result(verifier.validate_admin(token).await),
    }
}

/// Current admin state plus the generation of the check that owns it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminCheckTracker {
    generation: u64,
    access: AdminAccess,
}

impl AdminCheckTracker {
    pub fn access(&self) -> &AdminAccess {
        &self.access
    }

    /// Start a check for `token`, invalidating any earlier one.
    ///
    /// Returns the generation to hand back to [`Self::resolve`], or `None`
    /// when there is no token and the state went straight to `Unauthorized`.
    pub fn begin(&mut self, token: Option<&str>) -> Option<u64> {
        self.generation += 1;
        if token.is_none() {
            self.access = AdminAccess::Unauthorized { error: None };
            return None;
        }
        self.access = AdminAccess::Loading;
        Some(self.generation)
    }

    /// Apply a finished check. Returns `false` if the check was superseded.
    pub fn resolve(&mut self, generation: u64, access: AdminAccess) -> bool {
        if generation != self.generation {
            return false;
        }
        self.access = access;
        true
    }
}
