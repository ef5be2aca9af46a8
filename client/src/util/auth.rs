//! Shared auth form helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, registration, and the Google hand-off validate input and phrase
//! backend failures identically.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and check login input.
///
/// # Errors
///
/// Returns the inline message to show under the form.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = normalize_email(email)?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email, password.to_owned()))
}

/// Trim and check registration input.
///
/// # Errors
///
/// Returns the inline message to show under the form.
pub fn validate_register_input(email: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let email = normalize_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email, password.to_owned()))
}

fn normalize_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email.to_ascii_lowercase()),
        _ => Err("Enter a valid email address."),
    }
}

/// User-facing text for a failed login or registration.
pub fn auth_failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Status(401) => "Incorrect email or password.",
        ApiError::Status(409) => "An account with this email already exists.",
        ApiError::Status(429) => "Too many attempts. Try again in a minute.",
        _ => "Could not reach Cadenza. Please try again.",
    }
}

/// Outcome of the Google OAuth hand-off query.
///
/// # Errors
///
/// Returns the message to display when the backend reported an error or
/// sent no token.
pub fn google_callback_token(token: Option<String>, error: Option<String>) -> Result<String, String> {
    if let Some(error) = error.filter(|e| !e.trim().is_empty()) {
        return Err(if error == "access_denied" {
            "Google sign-in was cancelled.".to_owned()
        } else {
            format!("Google sign-in failed: {error}")
        });
    }
    token
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "Google sign-in did not return a session. Please try again.".to_owned())
}
