//! Signed-in workspace pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Generation, publishing, and billing live in the backend; these pages are
//! the shells the route guards protect. Each one only knows its heading, a
//! short blurb, and the primary action it links to.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::net::types::ConnectProvider;
use crate::routing::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkspaceCopy {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub action: Option<(&'static str, &'static str)>,
}

/// Heading and blurb for a workspace page; `None` for public pages.
pub fn workspace_copy(page: Page) -> Option<WorkspaceCopy> {
    let copy = |heading: &'static str, blurb: &'static str, action: Option<(&'static str, &'static str)>| Some(WorkspaceCopy { heading, blurb, action });
    match page {
        Page::MyMusic => copy("My Music", "Songs you have generated and kept.", Some(("New song", "/create/music"))),
        Page::MyVideos => copy("My Videos", "Music videos rendered from your songs.", Some(("New video", "/create/video"))),
        Page::Account => copy("Account", "Your profile, plan, and usage this month.", Some(("Manage plan", "/pricing"))),
        Page::Settings => copy(
            "Settings",
            "Preferences for generation and publishing.",
            Some(("Connected accounts", "/settings/connected-accounts")),
        ),
        Page::ConnectedAccounts => copy("Connected Accounts", "Channels Cadenza can publish to.", None),
        Page::ScheduledContent => copy("Scheduled Content", "Uploads queued for your connected channels.", None),
        Page::AiAssets => copy("AI Assets", "Characters and styles you can reuse across videos.", Some(("New character", "/ai-assets/create"))),
        Page::AiAssetsCreate => copy("Create Character", "Describe a character and generate reference art.", None),
        Page::CreateMusic => copy("Create Music", "Describe a song and Cadenza writes, sings, and mixes it.", None),
        Page::CreateVideo => copy("Create Video", "Pick a song and a visual style to render a music video.", None),
        Page::MotionCapture => copy("Motion Capture", "Record a webcam take to animate one of your characters.", None),
        Page::AdminEmail => copy("Admin: Email", "Send announcements and review delivery status.", None),
        _ => None,
    }
}

/// Confirmation shown after returning from an OAuth connect callback.
pub fn connected_banner(connected: Option<&str>) -> Option<String> {
    let provider = match connected? {
        slug if slug == ConnectProvider::YouTube.slug() => ConnectProvider::YouTube,
        slug if slug == ConnectProvider::TikTok.slug() => ConnectProvider::TikTok,
        _ => return None,
    };
    Some(format!("{} account connected.", provider.label()))
}

#[component]
pub fn WorkspacePage(page: Page) -> impl IntoView {
    let Some(copy) = workspace_copy(page) else {
        return ().into_any();
    };
    let query = use_query_map();
    let banner = move || {
        if page == Page::ConnectedAccounts { query.with(|q| connected_banner(q.get("connected").as_deref())) } else { None }
    };

    view! {
        <Title text=format!("{} | Cadenza", copy.heading)/>
        <main class="workspace">
            <header class="workspace__header">
                <h1>{copy.heading}</h1>
                {copy.action.map(|(label, href)| view! { <a class="btn btn--primary" href=href>{label}</a> })}
            </header>
            {move || banner().map(|text| view! { <div class="workspace__banner" role="status">{text}</div> })}
            <p class="workspace__blurb">{copy.blurb}</p>
        </main>
    }
    .into_any()
}
