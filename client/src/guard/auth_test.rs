use leptos_router::params::ParamsMap;

use super::*;
use crate::guard::fixtures::{subscription_variants, user, user_variants};

fn redirect_target(decision: &GuardDecision) -> Option<&'static str> {
    match decision {
        GuardDecision::RedirectTo(r) => Some(r.to),
        _ => None,
    }
}

#[test]
fn no_token_always_redirects_to_landing() {
    for user in user_variants() {
        for subscription in subscription_variants() {
            for verified_param in [false, true] {
                let session = Session { token: None, user: user.clone(), subscription: subscription.clone() };
                let nav = Navigation { path: "/my-music".to_owned(), verified_param };
                let decision = require_auth(&session, &nav);
                assert_eq!(redirect_target(&decision), Some("/"), "session {session:?}");
            }
        }
    }
}

#[test]
fn no_token_redirect_records_origin() {
    let decision = require_auth(&Session::default(), &Navigation::new("/account"));
    assert_eq!(
        decision,
        GuardDecision::RedirectTo(Redirect {
            to: "/",
            from: "/account".to_owned(),
            reason: RedirectReason::NotAuthenticated,
        })
    );
}

#[test]
fn unverified_user_without_bypass_goes_to_resend_verification() {
    for subscription in subscription_variants() {
        let session = Session { token: Some("abc".to_owned()), user: Some(user(false)), subscription };
        let decision = require_auth(&session, &Navigation::new("/create/music"));
        assert_eq!(redirect_target(&decision), Some("/resend-verification"));
    }
}

#[test]
fn verified_query_param_bypasses_unverified_redirect() {
    let session = Session { token: Some("abc".to_owned()), user: Some(user(false)), subscription: None };
    let mut query = ParamsMap::new();
    query.insert("verified", "true".to_owned());
    let nav = Navigation::from_parts("/my-music", &query);
    assert_eq!(require_auth(&session, &nav), GuardDecision::Render);
}

#[test]
fn verified_param_other_value_does_not_bypass() {
    let session = Session { token: Some("abc".to_owned()), user: Some(user(false)), subscription: None };
    let mut query = ParamsMap::new();
    query.insert("verified", "yes".to_owned());
    let nav = Navigation::from_parts("/my-music", &query);
    assert_eq!(redirect_target(&require_auth(&session, &nav)), Some("/resend-verification"));
}

#[test]
fn token_without_user_object_renders() {
    let session = Session::with_token("abc");
    assert_eq!(require_auth(&session, &Navigation::new("/my-music")), GuardDecision::Render);
}

#[test]
fn verified_user_renders() {
    let session = Session { token: Some("abc".to_owned()), user: Some(user(true)), subscription: None };
    assert_eq!(require_auth(&session, &Navigation::new("/settings")), GuardDecision::Render);
}
