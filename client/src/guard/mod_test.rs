use super::*;
use crate::guard::fixtures::{pro, signed_in, user};
use crate::net::types::SubscriptionStatus;

const VIDEO: FeatureGate = FeatureGate::new("Create Video");

fn redirect_to(decision: Option<GuardDecision>) -> Option<&'static str> {
    match decision {
        Some(GuardDecision::RedirectTo(r)) => Some(r.to),
        _ => None,
    }
}

// =============================================================
// Navigation / query parsing
// =============================================================

#[test]
fn verified_flag_reads_decoded_query_value() {
    let mut query = ParamsMap::new();
    query.insert("verified", "true".to_owned());
    query.insert("a", "1".to_owned());
    assert!(Navigation::from_parts("/x", &query).verified_param);

    let mut other = ParamsMap::new();
    other.insert("verified", "false".to_owned());
    other.insert("unverified", "true".to_owned());
    assert!(!Navigation::from_parts("/x", &other).verified_param);
    assert!(!Navigation::from_parts("/x", &ParamsMap::new()).verified_param);
}

#[test]
fn navigation_new_has_no_bypass() {
    assert!(!Navigation::new("/x").verified_param);
}

// =============================================================
// evaluate_chain
// =============================================================

#[test]
fn empty_chain_renders() {
    let decision = evaluate_chain(&[], &Session::default(), &Navigation::new("/"), &AdminAccess::Loading);
    assert_eq!(decision, Some(GuardDecision::Render));
}

#[test]
fn auth_redirect_short_circuits_subscription() {
    let guards = [GuardKind::Auth, GuardKind::Subscription(VIDEO)];
    let decision = evaluate_chain(&guards, &Session::default(), &Navigation::new("/create/video"), &AdminAccess::Loading);
    assert_eq!(redirect_to(decision), Some("/"));
}

#[test]
fn auth_runs_before_admin_even_when_listed_later() {
    let guards = [GuardKind::Admin, GuardKind::Auth];
    let decision = evaluate_chain(&guards, &Session::default(), &Navigation::new("/admin/email"), &AdminAccess::Loading);
    assert_eq!(redirect_to(decision), Some("/"));
}

#[test]
fn admin_loading_makes_chain_pending() {
    let guards = [GuardKind::Auth, GuardKind::Admin];
    let decision = evaluate_chain(&guards, &pro(), &Navigation::new("/admin/email"), &AdminAccess::Loading);
    assert_eq!(decision, None);
}

#[test]
fn admin_only_chain_pending_then_terminal() {
    let guards = [GuardKind::Admin];
    let nav = Navigation::new("/admin/email");
    assert_eq!(evaluate_chain(&guards, &pro(), &nav, &AdminAccess::Loading), None);
    assert_eq!(evaluate_chain(&guards, &pro(), &nav, &AdminAccess::Authorized), Some(GuardDecision::Render));
    let denied = AdminAccess::Unauthorized { error: Some("Unauthorized access".to_owned()) };
    assert_eq!(redirect_to(evaluate_chain(&guards, &pro(), &nav, &denied)), Some("/"));
}

#[test]
fn subscription_overlay_after_auth_passes() {
    let session = signed_in(Some("free"), SubscriptionStatus::Trialing);
    let guards = [GuardKind::Auth, GuardKind::Subscription(VIDEO)];
    let decision = evaluate_chain(&guards, &session, &Navigation::new("/create/video"), &AdminAccess::Loading);
    assert_eq!(decision, Some(GuardDecision::ShowOverlay(VIDEO)));
}

#[test]
fn unverified_redirect_wins_over_overlay() {
    let mut session = signed_in(Some("free"), SubscriptionStatus::Trialing);
    session.user = Some(user(false));
    let guards = [GuardKind::Subscription(VIDEO), GuardKind::Auth];
    let decision = evaluate_chain(&guards, &session, &Navigation::new("/create/video"), &AdminAccess::Loading);
    assert_eq!(redirect_to(decision), Some("/resend-verification"));
}

#[test]
fn paid_verified_user_renders_full_chain() {
    let guards = [GuardKind::Auth, GuardKind::Subscription(VIDEO)];
    let decision = evaluate_chain(&guards, &pro(), &Navigation::new("/create/video"), &AdminAccess::Loading);
    assert_eq!(decision, Some(GuardDecision::Render));
}

#[test]
fn needs_admin_check_only_for_admin_chains() {
    assert!(needs_admin_check(&[GuardKind::Admin]));
    assert!(!needs_admin_check(&[GuardKind::Auth, GuardKind::Subscription(VIDEO)]));
}
