//! Top navigation bar shared by every page.

use leptos::prelude::*;

use crate::state::redirect::RedirectState;
use crate::state::session::{SessionState, sign_out};

#[component]
pub fn SiteNav() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let signed_in = Memo::new(move |_| session.with(|s| s.session.is_authenticated()));
    let email = Memo::new(move |_| {
        session.with(|s| s.session.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())
    });

    view! {
        <header class="site-nav">
            <a class="site-nav__brand" href="/">"Cadenza"</a>
            <nav class="site-nav__links">
                <a href="/pricing">"Pricing"</a>
                <a href="/docs">"Docs"</a>
                <a href="/faq">"FAQ"</a>
            </nav>
            <div class="site-nav__session">
                <Show
                    when=move || signed_in.get()
                    fallback=|| view! {
                        <a class="btn" href="/login">"Sign in"</a>
                        <a class="btn btn--primary" href="/register">"Get started"</a>
                    }
                >
                    <a href="/my-music">"My Music"</a>
                    <a href="/account" class="site-nav__email">{move || email.get()}</a>
                    <SignOutButton/>
                </Show>
            </div>
        </header>
    }
}

/// The click handler owns a `navigate` handle, which is not `Copy`, so it is
/// built here rather than captured by `Show`'s children.
#[component]
fn SignOutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirects = expect_context::<RwSignal<RedirectState>>();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_click = move |_| {
        sign_out(session);
        redirects.update(|r| {
            r.take();
        });
        #[cfg(feature = "hydrate")]
        navigate("/", leptos_router::NavigateOptions::default());
    };

    view! { <button class="btn" on:click=on_click>"Sign out"</button> }
}
