//! Session record shared between the proxy and its provider adapters.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated user session.
///
/// Owned by the host. Adapters receive it mutably during enrichment and may
/// only write the identity fields (`email`, `user`, `preferred_username`,
/// `groups`); tokens and timestamps belong to the host's OAuth2 flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// OAuth2 access token.
    #[serde(default)]
    pub access_token: String,

    /// OIDC id token, if the provider issued one.
    #[serde(default)]
    pub id_token: String,

    /// OAuth2 refresh token.
    #[serde(default)]
    pub refresh_token: String,

    /// When the session was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the access token expires.
    #[serde(default)]
    pub expires_on: Option<DateTime<Utc>>,

    /// Email or provider identity string.
    #[serde(default)]
    pub email: String,

    /// User name.
    #[serde(default)]
    pub user: String,

    /// Preferred username.
    #[serde(default)]
    pub preferred_username: String,

    /// Group memberships.
    #[serde(default)]
    pub groups: Vec<String>,
}

impl SessionState {
    /// Create a session holding only an access token.
    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self { access_token: token.into(), ..Default::default() }
    }

    /// Check if the access token has expired.
    ///
    /// Sessions without an expiry never expire.
    pub fn is_expired(&self) -> bool {
        self.expires_on.is_some_and(|exp| exp < Utc::now())
    }

    /// Time since the session was created, if known.
    pub fn age(&self) -> Option<Duration> {
        self.created_at.map(|created| Utc::now() - created)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session{{email:{} user:{}", self.email, self.user)?;
        if !self.preferred_username.is_empty() {
            write!(f, " PreferredUsername:{}", self.preferred_username)?;
        }
        if !self.access_token.is_empty() {
            write!(f, " token:true")?;
        }
        if !self.id_token.is_empty() {
            write!(f, " id_token:true")?;
        }
        if let Some(created) = self.created_at {
            write!(f, " created:{}", created.to_rfc3339())?;
        }
        if let Some(expires) = self.expires_on {
            write!(f, " expires:{}", expires.to_rfc3339())?;
        }
        if !self.refresh_token.is_empty() {
            write!(f, " refresh_token:true")?;
        }
        if !self.groups.is_empty() {
            write!(f, " groups:{:?}", self.groups)?;
        }
        write!(f, "}}")
    }
}
