//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional fields default
//! so that older backend builds missing a key still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    /// Whether the email address has been confirmed.
    #[serde(default)]
    pub is_verified: bool,
}

/// Billing status reported by the backend for the current subscription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
    Incomplete,
    /// Any status string this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Subscription record attached to the session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Plan identifier such as `"free"`, `"pro"`, `"premium"`. Absent when
    /// the user has never picked a plan.
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub status: SubscriptionStatus,
}

/// `GET /api/auth/me` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionProfile {
    pub user: User,
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

/// Token issued by login, registration, and the Google OAuth hand-off.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Email + password credentials for login and registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `GET /api/validate-admin` response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheckResult {
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/public/{provider}/callback` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConnectCallbackRequest {
    pub code: String,
    pub state: String,
}

/// `POST /api/public/{provider}/callback` response body.
///
/// YouTube reports the connected channel as `channelName`; TikTok reports
/// `username`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectCallbackResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ConnectCallbackResponse {
    /// Display name of the connected account, whichever field the provider filled.
    pub fn account_name(&self) -> Option<&str> {
        self.channel_name.as_deref().or(self.username.as_deref())
    }
}

/// Generic `{ success }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
}

/// Third-party platform a user can connect for scheduled posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectProvider {
    YouTube,
    TikTok,
}

impl ConnectProvider {
    /// Path segment used by the backend and by the callback routes.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::TikTok => "tiktok",
        }
    }

    /// Human-facing platform name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::TikTok => "TikTok",
        }
    }
}
