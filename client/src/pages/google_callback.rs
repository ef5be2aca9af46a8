//! Return leg of the Google OAuth login.
//!
//! The backend finishes the OAuth exchange and redirects here with either
//! `token` or `error` in the query string.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::redirect::RedirectState;
use crate::state::session::SessionState;
use crate::util::auth::google_callback_token;

#[component]
pub fn GoogleCallbackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirects = expect_context::<RwSignal<RedirectState>>();
    let query = use_query_map();
    let outcome = query.with_untracked(|q| google_callback_token(q.get("token"), q.get("error")));
    let failure = RwSignal::new(outcome.as_ref().err().cloned());

    #[cfg(feature = "hydrate")]
    {
        if let Ok(token) = outcome {
            let navigate = leptos_router::hooks::use_navigate();
            leptos::task::spawn_local(async move {
                crate::state::session::sign_in(session, token).await;
                let target = redirects.get_untracked().return_path();
                redirects.update(|r| {
                    r.take();
                });
                navigate(&target, leptos_router::NavigateOptions { replace: true, ..Default::default() });
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (outcome, session, redirects);

    view! {
        <div class="callback-page">
            <div class="callback-card">
                <Show
                    when=move || failure.get().is_some()
                    fallback=|| view! {
                        <div class="spinner" aria-hidden="true"></div>
                        <p>"Signing you in…"</p>
                    }
                >
                    <h1>"Sign-in failed"</h1>
                    <p class="callback-card__error">{move || failure.get().unwrap_or_default()}</p>
                    <a class="btn" href="/login">"Back to sign in"</a>
                </Show>
            </div>
        </div>
    }
}
