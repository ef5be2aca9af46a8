//! `RequireSubscription`: paid-tier gate with the feature-locked overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Free users who are not trialing already see the trial paywall, so this
//! guard steps aside for them instead of stacking a second modal. Both
//! components call [`requires_trial_paywall`] so the two conditions cannot
//! drift apart.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use super::GuardDecision;
use crate::net::types::SubscriptionStatus;
use crate::state::session::Session;

/// Tier name the backend reports for unpaid accounts.
pub const FREE_TIER: &str = "free";

/// A paid feature as named in the upgrade overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureGate {
    pub name: &'static str,
    pub description: Option<&'static str>,
}

impl FeatureGate {
    pub const fn new(name: &'static str) -> Self {
        Self { name, description: None }
    }

    pub const fn described(name: &'static str, description: &'static str) -> Self {
        Self { name, description: Some(description) }
    }
}

/// A tier is present and it is not the free tier.
pub fn has_subscription(session: &Session) -> bool {
    session.tier().filter(|tier| !tier.is_empty()).is_some_and(|tier| tier != FREE_TIER)
}

pub fn is_trialing(session: &Session) -> bool {
    session
        .subscription
        .as_ref()
        .is_some_and(|s| s.status == SubscriptionStatus::Trialing)
}

/// Signed-in, unpaid, and not trialing: the trial paywall owns this user.
pub fn requires_trial_paywall(session: &Session) -> bool {
    session.user.is_some() && !has_subscription(session) && !is_trialing(session)
}

/// Decide whether a paid feature page renders plainly or under the overlay.
pub fn require_subscription(session: &Session, gate: FeatureGate) -> GuardDecision {
    if requires_trial_paywall(session) {
        return GuardDecision::Render;
    }
    if !has_subscription(session) {
        return GuardDecision::ShowOverlay(gate);
    }
    GuardDecision::Render
}
