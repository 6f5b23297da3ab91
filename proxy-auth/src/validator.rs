//! Token validator trait and HTTP implementation.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{ProviderError, Result, display_url};
use crate::provider_data::ProviderData;

/// Shared capability for checking whether an access token is still accepted.
///
/// Adapters only choose the headers; the validator owns the request.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Check `access_token` against the provider's validation endpoint.
    ///
    /// Failures of any kind are reported as `false`.
    async fn validate(
        &self,
        data: &ProviderData,
        access_token: &str,
        headers: Option<HeaderMap>,
    ) -> bool;
}

/// Build an `Authorization: <scheme> <token>` header.
pub fn authorization_header(scheme: &str, token: &str) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("{scheme} {token}"))
        .map_err(|e| ProviderError::InvalidHeader(e.to_string()))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Build an `Authorization: Bearer <token>` header.
pub fn bearer_header(token: &str) -> Result<HeaderMap> {
    authorization_header("Bearer", token)
}

/// Validates tokens with a `GET` against [`ProviderData::validate_url`].
///
/// Without headers the token is sent as the `access_token` query parameter.
/// Only `200 OK` counts as valid.
#[derive(Debug, Clone, Default)]
pub struct HttpTokenValidator {
    client: reqwest::Client,
}

impl HttpTokenValidator {
    /// Create a validator with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator sharing an existing HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TokenValidator for HttpTokenValidator {
    async fn validate(
        &self,
        data: &ProviderData,
        access_token: &str,
        headers: Option<HeaderMap>,
    ) -> bool {
        if access_token.is_empty() || data.validate_url.is_empty() {
            return false;
        }

        let mut endpoint = match url::Url::parse(&data.validate_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(
                    provider = %data.provider_name,
                    error = %e,
                    "invalid token validation url"
                );
                return false;
            }
        };
        let shown = display_url(&endpoint);

        let request = match headers {
            Some(headers) => self.client.get(endpoint).headers(headers),
            None => {
                endpoint.query_pairs_mut().append_pair("access_token", access_token);
                self.client.get(endpoint)
            }
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    provider = %data.provider_name,
                    url = %shown,
                    error = %e.without_url(),
                    "token validation request failed"
                );
                return false;
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            tracing::debug!(provider = %data.provider_name, url = %shown, "token validated");
            return true;
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            provider = %data.provider_name,
            url = %shown,
            status = status.as_u16(),
            body = %body,
            "token validation request failed"
        );
        false
    }
}
