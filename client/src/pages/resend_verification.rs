//! Landing spot for signed-in users whose email is not yet verified.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn ResendVerificationPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let email = move || {
        session
            .get()
            .session
            .user
            .map_or_else(|| "your inbox".to_owned(), |u| u.email)
    };

    let on_resend = move |_| {
        if busy.get() {
            return;
        }
        let Some(token) = session.get_untracked().token() else {
            info.set("Sign in first to resend the verification email.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Sending...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_verification(&token).await {
                Ok(()) => info.set("Verification email sent. Check your inbox.".to_owned()),
                Err(e) => {
                    log::warn!("resend verification failed: {e}");
                    info.set("Could not send the email. Please try again.".to_owned());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Verify your email"</h1>
                <p>"We sent a verification link to " <strong>{email}</strong> "."</p>
                <p class="auth-card__subtitle">
                    "Open the link to unlock your studio. It can take a minute to arrive."
                </p>
                <button class="btn btn--primary" on:click=on_resend disabled=move || busy.get()>
                    "Resend email"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
