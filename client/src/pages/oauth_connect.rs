//! OAuth callback pages for connecting YouTube and TikTok accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider redirects the browser here with `code` + `state` (or
//! `error`). The page makes exactly one exchange call against the public
//! backend endpoint; no session is required and nothing is retried. On
//! success it returns to the connected-accounts settings page after a short
//! pause so the confirmation is readable.

#[cfg(test)]
#[path = "oauth_connect_test.rs"]
mod oauth_connect_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api::{ApiError, ConnectExchanger};
use crate::net::types::{ConnectCallbackRequest, ConnectCallbackResponse, ConnectProvider};

/// Pause between the success message and the redirect.
pub const SUCCESS_REDIRECT_DELAY_MS: u32 = 2_000;

/// Query parameters the provider appends to the callback URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectState {
    Processing,
    Success { account: Option<String> },
    Error(String),
}

/// What to do with the callback before any network call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectStart {
    Fail(String),
    Exchange(ConnectCallbackRequest),
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Validate the callback query. Provider errors and missing parameters end
/// the flow here without contacting the backend.
pub fn start(provider: ConnectProvider, params: &CallbackParams) -> ConnectStart {
    let label = provider.label();
    if let Some(error) = non_empty(params.error.as_ref()) {
        if error == "access_denied" {
            return ConnectStart::Fail(format!("{label} connection was cancelled."));
        }
        let detail = non_empty(params.error_description.as_ref()).unwrap_or(error);
        return ConnectStart::Fail(format!("{label} connection failed: {detail}"));
    }

    match (non_empty(params.code.as_ref()), non_empty(params.state.as_ref())) {
        (Some(code), Some(state)) => {
            ConnectStart::Exchange(ConnectCallbackRequest { code: code.to_owned(), state: state.to_owned() })
        }
        _ => ConnectStart::Fail(format!("Missing authorization code from {label}. Please try connecting again.")),
    }
}

/// Map the exchange outcome onto a terminal state.
pub fn finish(provider: ConnectProvider, result: Result<ConnectCallbackResponse, ApiError>) -> ConnectState {
    let generic = || format!("Failed to connect {} account.", provider.label());
    match result {
        Ok(resp) if resp.success => ConnectState::Success { account: resp.account_name().map(str::to_owned) },
        Ok(resp) => ConnectState::Error(resp.error.unwrap_or_else(generic)),
        Err(e) => {
            log::warn!("{} code exchange failed: {e}", provider.slug());
            ConnectState::Error(generic())
        }
    }
}

/// Settings page the user returns to after a successful connection.
pub fn success_redirect(provider: ConnectProvider) -> String {
    format!("/settings/connected-accounts?connected={}", provider.slug())
}

/// Run the whole callback flow once.
pub async fn run<E: ConnectExchanger>(exchanger: &E, provider: ConnectProvider, params: &CallbackParams) -> ConnectState {
    match start(provider, params) {
        ConnectStart::Fail(message) => ConnectState::Error(message),
        ConnectStart::Exchange(request) => finish(provider, exchanger.exchange_connect_code(provider, &request).await),
    }
}

/// Callback page for one provider.
#[component]
pub fn ConnectCallbackPage(provider: ConnectProvider) -> impl IntoView {
    let query = use_query_map();
    let params = query.with_untracked(|q| CallbackParams {
        code: q.get("code"),
        state: q.get("state"),
        error: q.get("error"),
        error_description: q.get("error_description"),
    });
    let status = RwSignal::new(ConnectState::Processing);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let navigate = leptos_router::hooks::use_navigate();
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let next = run(&crate::net::api::HttpApi, provider, &params).await;
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            let succeeded = matches!(next, ConnectState::Success { .. });
            status.set(next);
            if succeeded {
                gloo_timers::future::TimeoutFuture::new(SUCCESS_REDIRECT_DELAY_MS).await;
                if alive_task.load(Ordering::Relaxed) {
                    navigate(&success_redirect(provider), leptos_router::NavigateOptions::default());
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = params;

    let label = provider.label();
    view! {
        <div class="callback-page">
            <div class="callback-card">
                {move || match status.get() {
                    ConnectState::Processing => view! {
                        <div class="spinner" aria-hidden="true"></div>
                        <p>{format!("Connecting your {label} account…")}</p>
                    }
                    .into_any(),
                    ConnectState::Success { account } => view! {
                        <h1>{format!("{label} connected")}</h1>
                        <p>
                            {account.map_or_else(
                                || "Your account is ready.".to_owned(),
                                |name| format!("Connected as {name}."),
                            )}
                        </p>
                        <p class="callback-card__hint">"Taking you back to your settings…"</p>
                    }
                    .into_any(),
                    ConnectState::Error(message) => view! {
                        <h1>"Connection failed"</h1>
                        <p class="callback-card__error">{message}</p>
                        <a class="btn" href="/settings/connected-accounts">"Back to connected accounts"</a>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
