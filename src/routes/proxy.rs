//! Same-origin `/api` proxy to the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client only ever talks to its own origin. Every `/api/*`
//! request is replayed against `API_BASE_URL` with the same method, path,
//! query, headers, and body; the backend's status, headers, and body come
//! back unchanged. Hop-by-hop headers and `host` are dropped in both
//! directions. Upstream transport failures become 502.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request bodies above this size are refused before contacting the backend.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body rejected: {0}")]
    Body(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Body(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

const HOP_BY_HOP: &[HeaderName] = &[
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Headers that must not cross the proxy in either direction.
pub fn is_forwardable(name: &HeaderName) -> bool {
    *name != header::HOST && *name != header::CONTENT_LENGTH && name.as_str() != "keep-alive" && !HOP_BY_HOP.contains(name)
}

pub fn forward_headers(headers: &HeaderMap) -> HeaderMap {
    headers.iter().filter(|(name, _)| is_forwardable(name)).map(|(n, v)| (n.clone(), v.clone())).collect()
}

/// Backend URL for an incoming `/api/...` request URI.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{base}{path_and_query}")
}

/// `ANY /api/{*path}` — forward to the backend.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| ProxyError::Body(e.to_string()))?;
    let url = upstream_url(&state.config.api_base_url, &parts.uri);

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forward_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(method = %parts.method, path = %parts.uri.path(), error = %e, "api proxy upstream failed");
            ProxyError::Upstream(e)
        })?;

    let status = upstream.status();
    let headers = forward_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, path = %parts.uri.path(), %status, "api proxy");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
