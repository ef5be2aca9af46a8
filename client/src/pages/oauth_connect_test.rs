use std::cell::Cell;

use futures::executor::block_on;

use super::*;

struct FakeExchanger {
    result: Result<ConnectCallbackResponse, ApiError>,
    calls: Cell<u32>,
}

impl FakeExchanger {
    fn new(result: Result<ConnectCallbackResponse, ApiError>) -> Self {
        Self { result, calls: Cell::new(0) }
    }
}

impl ConnectExchanger for FakeExchanger {
    async fn exchange_connect_code(
        &self,
        _provider: ConnectProvider,
        _request: &ConnectCallbackRequest,
    ) -> Result<ConnectCallbackResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

fn params(code: Option<&str>, state: Option<&str>, error: Option<&str>) -> CallbackParams {
    CallbackParams {
        code: code.map(str::to_owned),
        state: state.map(str::to_owned),
        error: error.map(str::to_owned),
        error_description: None,
    }
}

// =============================================================
// start
// =============================================================

#[test]
fn access_denied_is_reported_as_cancelled() {
    assert_eq!(
        start(ConnectProvider::YouTube, &params(None, None, Some("access_denied"))),
        ConnectStart::Fail("YouTube connection was cancelled.".to_owned())
    );
}

#[test]
fn other_provider_error_uses_description_when_present() {
    let mut p = params(Some("c"), Some("s"), Some("server_error"));
    p.error_description = Some("Quota exceeded".to_owned());
    assert_eq!(
        start(ConnectProvider::TikTok, &p),
        ConnectStart::Fail("TikTok connection failed: Quota exceeded".to_owned())
    );
}

#[test]
fn other_provider_error_falls_back_to_code() {
    assert_eq!(
        start(ConnectProvider::TikTok, &params(None, None, Some("server_error"))),
        ConnectStart::Fail("TikTok connection failed: server_error".to_owned())
    );
}

#[test]
fn missing_code_or_state_fails() {
    for p in [params(None, Some("s"), None), params(Some("c"), None, None), params(Some(" "), Some("s"), None)] {
        assert!(matches!(start(ConnectProvider::YouTube, &p), ConnectStart::Fail(_)), "{p:?}");
    }
}

#[test]
fn code_and_state_produce_exchange_request() {
    assert_eq!(
        start(ConnectProvider::YouTube, &params(Some("abc"), Some("xyz"), None)),
        ConnectStart::Exchange(ConnectCallbackRequest { code: "abc".to_owned(), state: "xyz".to_owned() })
    );
}

// =============================================================
// run
// =============================================================

#[test]
fn error_param_never_calls_backend() {
    let exchanger = FakeExchanger::new(Ok(ConnectCallbackResponse { success: true, ..Default::default() }));
    let state = block_on(run(&exchanger, ConnectProvider::YouTube, &params(None, None, Some("access_denied"))));
    assert_eq!(state, ConnectState::Error("YouTube connection was cancelled.".to_owned()));
    assert_eq!(exchanger.calls.get(), 0);
}

#[test]
fn successful_exchange_reports_channel_name() {
    let exchanger = FakeExchanger::new(Ok(ConnectCallbackResponse {
        success: true,
        channel_name: Some("Test".to_owned()),
        ..Default::default()
    }));
    let state = block_on(run(&exchanger, ConnectProvider::YouTube, &params(Some("c"), Some("s"), None)));
    assert_eq!(state, ConnectState::Success { account: Some("Test".to_owned()) });
    assert_eq!(exchanger.calls.get(), 1);
}

#[test]
fn unsuccessful_response_surfaces_backend_error() {
    let exchanger = FakeExchanger::new(Ok(ConnectCallbackResponse {
        success: false,
        error: Some("State mismatch".to_owned()),
        ..Default::default()
    }));
    let state = block_on(run(&exchanger, ConnectProvider::TikTok, &params(Some("c"), Some("s"), None)));
    assert_eq!(state, ConnectState::Error("State mismatch".to_owned()));
}

#[test]
fn unsuccessful_response_without_message_is_generic() {
    let exchanger = FakeExchanger::new(Ok(ConnectCallbackResponse::default()));
    let state = block_on(run(&exchanger, ConnectProvider::TikTok, &params(Some("c"), Some("s"), None)));
    assert_eq!(state, ConnectState::Error("Failed to connect TikTok account.".to_owned()));
}

#[test]
fn transport_failure_is_single_attempt_error() {
    let exchanger = FakeExchanger::new(Err(ApiError::Network("offline".to_owned())));
    let state = block_on(run(&exchanger, ConnectProvider::YouTube, &params(Some("c"), Some("s"), None)));
    assert_eq!(state, ConnectState::Error("Failed to connect YouTube account.".to_owned()));
    assert_eq!(exchanger.calls.get(), 1);
}

// =============================================================
// success_redirect
// =============================================================

#[test]
fn success_redirect_targets_connected_accounts() {
    assert_eq!(success_redirect(ConnectProvider::YouTube), "/settings/connected-accounts?connected=youtube");
    assert_eq!(success_redirect(ConnectProvider::TikTok), "/settings/connected-accounts?connected=tiktok");
}
