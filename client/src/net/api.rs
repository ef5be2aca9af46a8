//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers translate failures into
//! redirects or inline messages, never panics.
//!
//! DESIGN
//! ======
//! The two calls guards depend on (admin verification, connect-code exchange)
//! sit behind traits so guard state machines can be driven by fakes in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{AdminCheckResult, ConnectCallbackRequest, ConnectCallbackResponse, ConnectProvider};
#[cfg(feature = "hydrate")]
use super::types::{Ack, Credentials, SessionProfile, TokenResponse};

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the backend rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401))
    }
}

/// Backend check confirming elevated privileges for a session token.
pub trait AdminVerifier {
    /// `GET /api/validate-admin` with bearer auth.
    fn validate_admin(&self, token: &str) -> impl Future<Output = Result<AdminCheckResult, ApiError>>;
}

/// Backend exchange of an OAuth authorization code for a connected account.
pub trait ConnectExchanger {
    /// `POST /api/public/{provider}/callback` with `{ code, state }`.
    fn exchange_connect_code(
        &self,
        provider: ConnectProvider,
        request: &ConnectCallbackRequest,
    ) -> impl Future<Output = Result<ConnectCallbackResponse, ApiError>>;
}

/// Browser HTTP implementation of the backend traits.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

/// Backend entry point that starts the Google OAuth login redirect.
pub const GOOGLE_AUTH_ENDPOINT: &str = "/api/auth/google";

#[cfg(any(test, feature = "hydrate"))]
fn connect_callback_endpoint(provider: ConnectProvider) -> String {
    format!("/api/public/{}/callback", provider.slug())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

impl AdminVerifier for HttpApi {
    async fn validate_admin(&self, token: &str) -> Result<AdminCheckResult, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/api/validate-admin")
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(network)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}

impl ConnectExchanger for HttpApi {
    async fn exchange_connect_code(
        &self,
        provider: ConnectProvider,
        request: &ConnectCallbackRequest,
    ) -> Result<ConnectCallbackResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&connect_callback_endpoint(provider))
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (provider, request);
            Err(ApiError::Unavailable)
        }
    }
}

/// Fetch the user and subscription behind `token` from `/api/auth/me`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 401 when the token is expired or revoked.
pub async fn fetch_session_profile(token: &str) -> Result<super::types::SessionProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        decode::<SessionProfile>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Exchange email + password for a session token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    post_credentials("/api/auth/login", email, password).await
}

/// Create an account via `POST /api/auth/register` and return its session token.
///
/// # Errors
///
/// Returns an error if the request fails or the backend refuses the signup.
pub async fn register(email: &str, password: &str) -> Result<String, ApiError> {
    post_credentials("/api/auth/register", email, password).await
}

async fn post_credentials(endpoint: &str, email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = Credentials { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let body: TokenResponse = decode(resp).await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to send a fresh verification email.
///
/// # Errors
///
/// Returns an error if the request fails or the backend reports `success: false`.
pub async fn resend_verification(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/resend-verification")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        let body: Ack = decode(resp).await?;
        if !body.success {
            return Err(ApiError::Decode("resend rejected".to_owned()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}
