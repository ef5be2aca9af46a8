//! Login page supporting email + password and Google OAuth.

use leptos::prelude::*;

use crate::net::api::GOOGLE_AUTH_ENDPOINT;
use crate::state::redirect::RedirectState;
use crate::state::session::SessionState;
use crate::util::auth::validate_login_input;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirects = expect_context::<RwSignal<RedirectState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(token) => {
                        crate::state::session::sign_in(session, token).await;
                        let target = redirects.get_untracked().return_path();
                        redirects.update(|r| {
                            r.take();
                        });
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(crate::util::auth::auth_failure_message(&e).to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, session, redirects);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to keep creating."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-divider">"or"</div>
                <a href=GOOGLE_AUTH_ENDPOINT rel="external" class="btn btn--google">
                    "Continue with Google"
                </a>
                <p class="auth-card__footer">
                    "New to Cadenza? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
