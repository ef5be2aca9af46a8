//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client reused by every proxied
//! request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Clone is required by Axum; the config is Arc-wrapped and the client is
/// internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the TLS backend for the HTTP client cannot be
    /// initialized.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
