use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;
use crate::config::Config;

fn routes() -> Router {
    let config = Config {
        port: 0,
        api_base_url: "http://127.0.0.1:9".to_owned(),
        site_url: "https://cadenza.test".to_owned(),
        api_timeout: Duration::from_secs(1),
    };
    api_routes(AppState::new(config).unwrap())
}

async fn get_body(uri: &str) -> (StatusCode, String, String) {
    let resp = routes().oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = resp.status();
    let content_type =
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
    let body = to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _, _) = get_body("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn sitemap_is_served_as_xml() {
    let (status, content_type, body) = get_body("/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/xml"));
    assert!(body.contains("<loc>https://cadenza.test/pricing</loc>"));
}

#[tokio::test]
async fn robots_is_served_as_text() {
    let (status, content_type, body) = get_body("/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert!(body.contains("Sitemap: https://cadenza.test/sitemap.xml"));
}
