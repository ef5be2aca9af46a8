//! Last guard redirect, kept so the destination page can react to it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards write here right before navigating away. The login page uses
//! `from` to send the user back after signing in; the landing page shows the
//! admin guard's error as a notice.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use crate::guard::{Redirect, RedirectReason};

/// Default destination after signing in when no redirect was recorded.
pub const DEFAULT_AFTER_LOGIN: &str = "/my-music";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectState {
    pub last: Option<Redirect>,
}

impl RedirectState {
    pub fn record(&mut self, redirect: Redirect) {
        self.last = Some(redirect);
    }

    /// Where to go once the user has signed in. Only origins bounced for
    /// missing authentication are honored.
    pub fn return_path(&self) -> String {
        match &self.last {
            Some(Redirect { from, reason: RedirectReason::NotAuthenticated, .. }) if is_local_path(from) => {
                from.clone()
            }
            _ => DEFAULT_AFTER_LOGIN.to_owned(),
        }
    }

    /// Message to surface on the landing page, if the last redirect had one.
    pub fn notice(&self) -> Option<String> {
        match &self.last {
            Some(Redirect { reason: RedirectReason::NotAdmin { error }, .. }) => error.clone(),
            _ => None,
        }
    }

    /// Consume the recorded redirect once it has been acted on.
    pub fn take(&mut self) -> Option<Redirect> {
        self.last.take()
    }
}

/// Same-origin absolute path; rejects protocol-relative `//host` forms.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}
