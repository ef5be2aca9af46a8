//! Trial paywall for signed-in users with no plan and no active trial.
//!
//! Shares `requires_trial_paywall` with the subscription guard, which steps
//! aside whenever this paywall is showing.

use leptos::prelude::*;

use crate::components::feature_locked::BILLING_PATH;
use crate::guard::subscription::requires_trial_paywall;
use crate::state::session::SessionState;

#[component]
pub fn TrialPaywall() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let visible = Memo::new(move |_| session.with(|s| requires_trial_paywall(&s.session)));

    view! {
        <Show when=move || visible.get()>
            <div class="feature-locked__backdrop">
                <div class="feature-locked__modal trial-paywall" role="dialog" aria-modal="true">
                    <h2>"Start your free trial"</h2>
                    <p>
                        "Try every Cadenza feature free for 3 days: unlimited songs, music videos, and "
                        "scheduled posting. Cancel anytime."
                    </p>
                    <a class="btn btn--primary" href=BILLING_PATH>"Start free trial"</a>
                </div>
            </div>
        </Show>
    }
}
