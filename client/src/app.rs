//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos sees two routes: `/` and a wildcard. Both render `RouteOutlet`,
//! which resolves the path against `routing::ROUTES` so the table stays the
//! single place that knows which page and which guards a path gets. Unknown
//! paths land on the landing page instead of a 404.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::guards::Guarded;
use crate::components::site_nav::SiteNav;
use crate::pages::content::{ContentPage, Document};
use crate::pages::google_callback::GoogleCallbackPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::oauth_connect::ConnectCallbackPage;
use crate::pages::pricing::PricingPage;
use crate::pages::register::RegisterPage;
use crate::pages::resend_verification::ResendVerificationPage;
use crate::pages::workspace::WorkspacePage;
use crate::routing::{self, Page, Resolved};
use crate::state::redirect::RedirectState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and redirect contexts, then starts auth
/// initialization in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let redirects = RwSignal::new(RedirectState::default());
    provide_context(session);
    provide_context(redirects);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::session::initialize(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/cadenza-web.css"/>

        <Router>
            <SiteNav/>
            <Routes fallback=|| view! { <RouteOutlet/> }>
                <Route path=StaticSegment("") view=RouteOutlet/>
                <Route path=WildcardSegment("any") view=RouteOutlet/>
            </Routes>
        </Router>
    }
}

/// Render whatever the route table says lives at the current path.
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();
    let resolved = Memo::new(move |_| location.pathname.with(|path| routing::resolve(path)));

    move || match resolved.get() {
        Resolved::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
        Resolved::Landing(variant) => view! { <LandingPage variant=variant/> }.into_any(),
        Resolved::Route(entry) => {
            let page = entry.page;
            view! { <Guarded guards=entry.guards>{move || render_page(page)}</Guarded> }.into_any()
        }
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Landing => view! { <LandingPage variant=None/> }.into_any(),
        Page::Pricing => view! { <PricingPage/> }.into_any(),
        Page::Docs => view! { <ContentPage document=Document::Docs/> }.into_any(),
        Page::Faq => view! { <ContentPage document=Document::Faq/> }.into_any(),
        Page::Terms => view! { <ContentPage document=Document::Terms/> }.into_any(),
        Page::Privacy => view! { <ContentPage document=Document::Privacy/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::ResendVerification => view! { <ResendVerificationPage/> }.into_any(),
        Page::GoogleCallback => view! { <GoogleCallbackPage/> }.into_any(),
        Page::ConnectCallback(provider) => view! { <ConnectCallbackPage provider=provider/> }.into_any(),
        workspace => view! { <WorkspacePage page=workspace/> }.into_any(),
    }
}
