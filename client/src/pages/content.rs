//! Docs, FAQ, and legal pages rendered from bundled Markdown.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;
use leptos_meta::{Link, Title};

use crate::util::markdown::{first_heading, render_markdown_html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Document {
    Docs,
    Faq,
    Terms,
    Privacy,
}

impl Document {
    pub const ALL: [Document; 4] = [Self::Docs, Self::Faq, Self::Terms, Self::Privacy];

    pub const fn source(self) -> &'static str {
        match self {
            Self::Docs => include_str!("../../content/docs.md"),
            Self::Faq => include_str!("../../content/faq.md"),
            Self::Terms => include_str!("../../content/terms.md"),
            Self::Privacy => include_str!("../../content/privacy.md"),
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Docs => "/docs",
            Self::Faq => "/faq",
            Self::Terms => "/terms",
            Self::Privacy => "/privacy",
        }
    }

    pub fn title(self) -> String {
        let heading = first_heading(self.source()).unwrap_or("Cadenza");
        format!("{heading} | Cadenza")
    }
}

#[component]
pub fn ContentPage(document: Document) -> impl IntoView {
    let html = render_markdown_html(document.source());
    view! {
        <Title text=document.title()/>
        <Link rel="canonical" href=document.path()/>
        <main class="content-page">
            <article class="content-page__body markdown" inner_html=html></article>
        </main>
    }
}
