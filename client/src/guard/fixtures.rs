//! Session builders shared by guard tests.

use crate::net::types::{Subscription, SubscriptionStatus, User};
use crate::state::session::Session;

pub fn user(verified: bool) -> User {
    User { id: "u1".to_owned(), email: "listener@example.com".to_owned(), is_verified: verified }
}

pub fn subscription(tier: Option<&str>, status: SubscriptionStatus) -> Subscription {
    Subscription { tier: tier.map(str::to_owned), status }
}

pub fn signed_in(tier: Option<&str>, status: SubscriptionStatus) -> Session {
    Session {
        token: Some("abc".to_owned()),
        user: Some(user(true)),
        subscription: Some(subscription(tier, status)),
    }
}

pub fn pro() -> Session {
    signed_in(Some("pro"), SubscriptionStatus::Active)
}

/// Every subscription shape the guards distinguish, including none at all.
pub fn subscription_variants() -> Vec<Option<Subscription>> {
    let tiers = [None, Some("free"), Some("pro"), Some("premium")];
    let statuses = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Trialing,
        SubscriptionStatus::PastDue,
        SubscriptionStatus::Canceled,
        SubscriptionStatus::Unknown,
    ];
    let mut out = vec![None];
    for tier in tiers {
        for status in statuses {
            out.push(Some(subscription(tier, status)));
        }
    }
    out
}

/// Users the guards distinguish: none, unverified, verified.
pub fn user_variants() -> Vec<Option<User>> {
    vec![None, Some(user(false)), Some(user(true))]
}
