//! Crawler-facing endpoints generated from the client route table.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Sitemap listing every indexable path under `site_url`.
pub fn sitemap_xml(site_url: &str, paths: &[&str]) -> String {
    let mut out = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    out.push('\n');
    for path in paths {
        let loc = if *path == "/" { format!("{site_url}/") } else { format!("{site_url}{path}") };
        out.push_str("  <url><loc>");
        out.push_str(&xml_escape(&loc));
        out.push_str("</loc></url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

pub fn robots_txt(site_url: &str) -> String {
    format!(
        "User-agent: *\nDisallow: /api/\nDisallow: /admin/\nDisallow: /oauth/\nDisallow: /auth/\n\nSitemap: {site_url}/sitemap.xml\n"
    )
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

/// `GET /sitemap.xml`
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let body = sitemap_xml(&state.config.site_url, &client::routing::indexable_paths());
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], body)
}

/// `GET /robots.txt`
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], robots_txt(&state.config.site_url))
}
