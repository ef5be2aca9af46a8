//! Public landing page, also rendered for SEO variants and unknown paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routing::resolve` hands this page the SEO variant registered for the
//! current path, if any. Only metadata and the hero headline vary; the body
//! is shared. A notice left by the admin guard is shown once, then cleared.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::routing::seo::{DEFAULT_DESCRIPTION, DEFAULT_HEADLINE, DEFAULT_TITLE, SeoRoute};
use crate::state::redirect::RedirectState;
use crate::state::session::SessionState;

/// Head and hero content for one rendering of the landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingMeta {
    pub title: String,
    pub description: String,
    pub headline: String,
    pub canonical: String,
}

impl LandingMeta {
    pub fn for_variant(variant: Option<&SeoRoute>) -> Self {
        match variant {
            Some(route) => Self {
                title: route.title.clone(),
                description: route.description.clone(),
                headline: route.headline.clone(),
                canonical: route.path.clone(),
            },
            None => Self {
                title: DEFAULT_TITLE.to_owned(),
                description: DEFAULT_DESCRIPTION.to_owned(),
                headline: DEFAULT_HEADLINE.to_owned(),
                canonical: "/".to_owned(),
            },
        }
    }
}

const FEATURES: &[(&str, &str)] = &[
    ("Songs in a minute", "Describe a mood or a story and get two full takes with vocals."),
    ("Music videos", "Pair any track with AI visuals sized for every platform."),
    ("Auto-publish", "Schedule uploads to YouTube and TikTok while you sleep."),
    ("Your characters", "Design recurring AI artists and animate them with motion capture."),
];

#[component]
pub fn LandingPage(variant: Option<&'static SeoRoute>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirects = expect_context::<RwSignal<RedirectState>>();
    let meta = LandingMeta::for_variant(variant);
    let notice = RwSignal::new(redirects.with_untracked(RedirectState::notice));
    if notice.get_untracked().is_some() {
        redirects.update_untracked(|r| {
            r.take();
        });
    }

    let cta_href = move || if session.with(|s| s.session.is_authenticated()) { "/create/music" } else { "/register" };

    view! {
        <Title text=meta.title.clone()/>
        <Meta name="description" content=meta.description.clone()/>
        <Meta property="og:title" content=meta.title.clone()/>
        <Meta property="og:description" content=meta.description.clone()/>
        <Link rel="canonical" href=meta.canonical.clone()/>

        <main class="landing">
            <Show when=move || notice.get().is_some()>
                <div class="landing__notice" role="alert">
                    <span>{move || notice.get().unwrap_or_default()}</span>
                    <button class="landing__notice-close" on:click=move |_| notice.set(None)>"×"</button>
                </div>
            </Show>
            <section class="landing__hero">
                <h1>{meta.headline.clone()}</h1>
                <p class="landing__lede">{meta.description.clone()}</p>
                <a class="btn btn--primary btn--large" href=cta_href>"Start creating"</a>
                <a class="btn btn--large" href="/pricing">"See plans"</a>
            </section>
            <section class="landing__features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <article class="landing__feature">
                                <h2>{*title}</h2>
                                <p>{*body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}
