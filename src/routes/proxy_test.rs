use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::routing::{any, get};
use tower::ServiceExt;

use super::*;
use crate::config::Config;

fn config(api_base_url: &str) -> Config {
    Config {
        port: 0,
        api_base_url: api_base_url.to_owned(),
        site_url: "http://site.test".to_owned(),
        api_timeout: Duration::from_secs(5),
    }
}

fn proxy_app(api_base_url: &str) -> Router {
    let state = AppState::new(config(api_base_url)).unwrap();
    Router::new().route("/api/{*path}", any(forward)).with_state(state)
}

/// Spawn a fake backend and return its base URL.
async fn spawn_backend() -> String {
    let backend = Router::new()
        .route(
            "/api/validate-admin",
            get(|headers: HeaderMap| async move {
                let auth = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()).unwrap_or("");
                let client_host = headers.get(header::HOST).is_some_and(|h| *h == "cadenza.test");
                let body = format!(r#"{{"isAdmin":{},"clientHost":{client_host}}}"#, auth == "Bearer good");
                ([(header::CONTENT_TYPE, "application/json")], body)
            }),
        )
        .route(
            "/api/public/youtube/callback",
            axum::routing::post(|body: String| async move { (StatusCode::CREATED, body) }),
        )
        .route("/api/auth/me", get(|| async { StatusCode::UNAUTHORIZED }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn hop_by_hop_and_host_headers_are_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("cadenza.test"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let forwarded = forward_headers(&headers);
    assert_eq!(forwarded.len(), 2);
    assert!(forwarded.contains_key(header::AUTHORIZATION));
    assert!(forwarded.contains_key(header::CONTENT_TYPE));
}

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/public/tiktok/callback?x=1".parse().unwrap();
    assert_eq!(upstream_url("http://backend:8080", &uri), "http://backend:8080/api/public/tiktok/callback?x=1");
}

#[tokio::test]
async fn forwards_headers_and_returns_backend_body() {
    let base = spawn_backend().await;
    let resp = proxy_app(&base)
        .oneshot(
            Request::builder()
                .uri("/api/validate-admin")
                .header(header::AUTHORIZATION, "Bearer good")
                .header(header::HOST, "cadenza.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    let body = to_bytes(resp.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], br#"{"isAdmin":true,"clientHost":false}"#);
}

#[tokio::test]
async fn forwards_method_body_and_status() {
    let base = spawn_backend().await;
    let resp = proxy_app(&base)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/public/youtube/callback")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"code":"c","state":"s"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = to_bytes(resp.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], br#"{"code":"c","state":"s"}"#);
}

#[tokio::test]
async fn backend_error_status_passes_through() {
    let base = spawn_backend().await;
    let resp = proxy_app(&base)
        .oneshot(Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let resp = proxy_app(&format!("http://{addr}"))
        .oneshot(Request::builder().uri("/api/validate-admin").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
