//! Provider adapter errors.

use thiserror::Error;

/// Errors that can occur while enriching a session or configuring a provider.
///
/// Token validation never produces these: a failed validation is reported as
/// `false` by [`TokenValidator`](crate::TokenValidator).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request could not be completed (connection refused, DNS, TLS, ...).
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status {status} from {url}: {body}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body is not valid JSON.
    #[error("Invalid JSON from {url}: {message}")]
    InvalidJson { url: String, message: String },

    /// The expected field is absent or has the wrong type.
    #[error("Unable to extract {field} from userinfo endpoint: {message}")]
    MissingField { field: String, message: String },

    /// The provider returned a present but empty identity.
    #[error("empty id received")]
    EmptyIdentity,

    /// The token cannot be carried in an HTTP header.
    #[error("Invalid authorization header: {0}")]
    InvalidHeader(String),

    /// Provider configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    /// Whether the identity endpoint could not be asked at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, ProviderError::Transport { .. } | ProviderError::UnexpectedStatus { .. })
    }

    /// Whether the endpoint answered but the payload was unusable.
    pub fn is_decode(&self) -> bool {
        matches!(self, ProviderError::InvalidJson { .. } | ProviderError::MissingField { .. })
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(display_url).unwrap_or_default();
        ProviderError::Transport { url, message: err.without_url().to_string() }
    }
}

/// Render a URL for logs and errors without its query string.
///
/// The token validator may carry the access token as a query parameter.
pub(crate) fn display_url(url: &url::Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.set_fragment(None);
    shown.to_string()
}

/// A convenience result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
