//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided to the component tree as `RwSignal<SessionState>` by `App`.
//! Auth initialization and the login/logout flows are the only writers;
//! route guards read it through the pure `Session` snapshot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{SessionProfile, Subscription, User};

/// Snapshot of who is signed in and what they pay for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub subscription: Option<Subscription>,
}

impl Session {
    /// Session holding only a token, before the profile has been fetched.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()), user: None, subscription: None }
    }

    /// Session populated from a validated token and its profile.
    pub fn from_profile(token: impl Into<String>, profile: SessionProfile) -> Self {
        Self { token: Some(token.into()), user: Some(profile.user), subscription: profile.subscription }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Subscription tier, if the backend reported one.
    pub fn tier(&self) -> Option<&str> {
        self.subscription.as_ref().and_then(|s| s.tier.as_deref())
    }
}

/// Context value wrapping the session with its initialization flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Session,
    /// Set once the stored token (if any) has been validated or discarded.
    pub initialized: bool,
}

impl SessionState {
    /// Record the outcome of auth initialization.
    pub fn finish_init(&mut self, session: Session) {
        self.session = session;
        self.initialized = true;
    }

    /// Drop all credentials; the state stays initialized.
    pub fn clear(&mut self) {
        self.session = Session::default();
        self.initialized = true;
    }

    pub fn token(&self) -> Option<String> {
        self.session.token.clone()
    }
}

/// Resolve the stored token into a session.
///
/// A 401 means the token expired: the session comes back empty and the
/// returned flag tells the caller to forget the stored token. Any other
/// failure keeps the bare token, so the user stays signed in with no profile.
pub fn session_from_profile_result(
    token: String,
    result: Result<SessionProfile, crate::net::api::ApiError>,
) -> (Session, bool) {
    match result {
        Ok(profile) => (Session::from_profile(token, profile), false),
        Err(e) if e.is_unauthorized() => {
            log::info!("stored session token rejected; signing out");
            (Session::default(), true)
        }
        Err(e) => {
            log::warn!("session profile fetch failed: {e}");
            (Session::with_token(token), false)
        }
    }
}

/// Load the stored token, validate it, and publish the result.
///
/// Only runs in the browser; on the server the session stays uninitialized
/// until hydration.
#[cfg(feature = "hydrate")]
pub async fn initialize(state: leptos::prelude::RwSignal<SessionState>) {
    use leptos::prelude::*;

    let Some(token) = crate::util::token_storage::load() else {
        state.update(|s| s.finish_init(Session::default()));
        return;
    };
    let result = crate::net::api::fetch_session_profile(&token).await;
    let (session, expired) = session_from_profile_result(token, result);
    if expired {
        crate::util::token_storage::clear();
    }
    state.update(|s| s.finish_init(session));
}

/// Persist a freshly issued token and load its profile into the session.
#[cfg(feature = "hydrate")]
pub async fn sign_in(state: leptos::prelude::RwSignal<SessionState>, token: String) {
    use leptos::prelude::*;

    crate::util::token_storage::store(&token);
    let result = crate::net::api::fetch_session_profile(&token).await;
    let (session, expired) = session_from_profile_result(token, result);
    if expired {
        crate::util::token_storage::clear();
    }
    state.update(|s| s.finish_init(session));
}

/// Forget the token locally and in the session store.
pub fn sign_out(state: leptos::prelude::RwSignal<SessionState>) {
    use leptos::prelude::*;

    crate::util::token_storage::clear();
    state.update(SessionState::clear);
}
