//! Leptos wrapper that applies a route's guard chain to its page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard::evaluate_chain` decides; this component only turns the decision
//! into a view and runs the admin check when the chain includes one.
//!
//! - pending (admin check in flight, or session not yet initialized for a
//!   guarded route): spinner, page not mounted
//! - `Render`: page, plus the trial paywall on authenticated routes
//! - `RedirectTo`: the redirect is recorded in `RedirectState`, then followed
//! - `ShowOverlay`: page mounted but inert beneath the upgrade modal; the
//!   outlet remounts this component per path, so every locked page starts
//!   with the modal up

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::feature_locked::FeatureLockedModal;
use crate::components::spinner::PageSpinner;
use crate::components::trial_paywall::TrialPaywall;
use crate::guard::admin::AdminCheckTracker;
use crate::guard::{GuardDecision, GuardKind, Navigation, evaluate_chain, needs_admin_check};
use crate::state::redirect::RedirectState;
use crate::state::session::SessionState;

#[component]
pub fn Guarded(guards: &'static [GuardKind], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirects = expect_context::<RwSignal<RedirectState>>();
    let location = use_location();
    let tracker = RwSignal::new(AdminCheckTracker::default());

    if needs_admin_check(guards) {
        install_admin_check(session, tracker);
    }

    let decision = Memo::new(move |_| {
        let state = session.get();
        if !guards.is_empty() && !state.initialized {
            return None;
        }
        let nav = location.query.with(|query| Navigation::from_parts(location.pathname.get(), query));
        tracker.with(|t| evaluate_chain(guards, &state.session, &nav, t.access()))
    });

    let authenticated_route = guards.contains(&GuardKind::Auth);

    move || match decision.get() {
        None => view! { <PageSpinner/> }.into_any(),
        Some(GuardDecision::Render) => {
            view! {
                {children()}
                {authenticated_route.then(|| view! { <TrialPaywall/> })}
            }
            .into_any()
        }
        Some(GuardDecision::RedirectTo(redirect)) => {
            let to = redirect.to;
            log::debug!("guard redirect {} -> {to}", redirect.from);
            // Recorded before navigating so the destination page can read it.
            redirects.update_untracked(|r| r.record(redirect));
            view! { <Redirect path=to/> }.into_any()
        }
        Some(GuardDecision::ShowOverlay(gate)) => {
            view! {
                <div class="feature-locked">
                    <div class="feature-locked__content" inert=true aria-hidden="true">
                        {children()}
                    </div>
                    <FeatureLockedModal gate=gate/>
                </div>
            }
            .into_any()
        }
    }
}

/// Re-run the admin check whenever the session token changes.
///
/// Results land only if the component is still mounted and the check has not
/// been superseded by a newer token.
fn install_admin_check(session: RwSignal<SessionState>, tracker: RwSignal<AdminCheckTracker>) {
    let alive = Arc::new(AtomicBool::new(true));
    let token = Memo::new(move |_| session.with(|s| s.initialized.then(|| s.token())));

    let alive_effect = alive.clone();
    Effect::new(move || {
        // Outer `None`: auth initialization has not finished yet.
        let Some(token) = token.get() else {
            return;
        };
        let mut generation = None;
        tracker.update(|t| generation = t.begin(token.as_deref()));

        #[cfg(feature = "hydrate")]
        {
            if let (Some(generation), Some(token)) = (generation, token) {
                let alive = alive_effect.clone();
                leptos::task::spawn_local(async move {
                    let access = crate::guard::admin::check_admin(&crate::net::api::HttpApi, Some(&token)).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    tracker.update(|t| {
                        if !t.resolve(generation, access) {
                            log::debug!("discarding superseded admin check");
                        }
                    });
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (generation, &alive_effect);
    });

    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
