//! Ku provider.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{ProviderError, Result, display_url};
use crate::identity::extract_identity;
use crate::provider::Provider;
use crate::provider_data::{ProviderData, ProviderDefaults};
use crate::session::SessionState;
use crate::validator::{HttpTokenValidator, TokenValidator, bearer_header};

pub const KU_PROVIDER_NAME: &str = "Ku";
pub const KU_DEFAULT_SCOPE: &str = "*";
pub const KU_DEFAULT_LOGIN_URL: &str = "https://ku.org/oauth/authorize";
pub const KU_DEFAULT_REDEEM_URL: &str = "https://ku.org/oauth/token";
pub const KU_DEFAULT_VALIDATE_URL: &str = "https://ku.org/api/v3/user";

const KU_DEFAULTS: ProviderDefaults = ProviderDefaults {
    name: KU_PROVIDER_NAME,
    login_url: KU_DEFAULT_LOGIN_URL,
    redeem_url: KU_DEFAULT_REDEEM_URL,
    profile_url: None,
    validate_url: KU_DEFAULT_VALIDATE_URL,
    scope: KU_DEFAULT_SCOPE,
};

/// Location of the user's identifier in the userinfo payload.
const IDENTITY_PATH: &[&str] = &["data", "id"];

/// Ku identity provider.
///
/// Ku exposes the user at its validation endpoint, so unless a profile URL
/// is configured enrichment reads `data.id` from there.
pub struct KuProvider {
    data: ProviderData,
    client: reqwest::Client,
    validator: Arc<dyn TokenValidator>,
}

impl KuProvider {
    /// Create a new Ku provider.
    ///
    /// Unset fields of `data` receive Ku's public endpoints; fields already
    /// set are kept.
    pub fn new(data: ProviderData) -> Self {
        Self::with_validator(data, Arc::new(HttpTokenValidator::new()))
    }

    /// Create with a host-supplied token validator.
    pub fn with_validator(mut data: ProviderData, validator: Arc<dyn TokenValidator>) -> Self {
        data.set_provider_defaults(&KU_DEFAULTS);
        Self { data, client: reqwest::Client::new(), validator }
    }

    /// Use `client` for userinfo requests.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Get the client ID.
    pub fn client_id(&self) -> &str {
        &self.data.client_id
    }

    async fn fetch_identity(&self, url: &str, access_token: &str) -> Result<Value> {
        let shown = url::Url::parse(url).map(|u| display_url(&u)).unwrap_or_else(|_| url.into());

        let response = self
            .client
            .get(url)
            .headers(bearer_header(access_token)?)
            .send()
            .await
            .map_err(|e| ProviderError::Transport {
                url: shown.clone(),
                message: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::UnexpectedStatus { url: shown, status: status.as_u16(), body });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ProviderError::InvalidJson { url: shown, message: e.to_string() })
    }
}

#[async_trait]
impl Provider for KuProvider {
    fn data(&self) -> &ProviderData {
        &self.data
    }

    async fn enrich_session(&self, session: &mut SessionState) -> Result<()> {
        let url = self.data.identity_url();

        let payload = self.fetch_identity(url, &session.access_token).await.inspect_err(|e| {
            tracing::error!(provider = KU_PROVIDER_NAME, error = %e, "failed making request");
        })?;

        let id = extract_identity(&payload, IDENTITY_PATH)?;
        if id.is_empty() {
            return Err(ProviderError::EmptyIdentity);
        }

        tracing::debug!(provider = KU_PROVIDER_NAME, "session enriched");
        session.email = id;
        Ok(())
    }

    async fn validate_session(&self, session: &SessionState) -> bool {
        let headers = match bearer_header(&session.access_token) {
            Ok(headers) => headers,
            Err(e) => {
                tracing::warn!(provider = KU_PROVIDER_NAME, error = %e, "unusable access token");
                return false;
            }
        };
        self.validator.validate(&self.data, &session.access_token, Some(headers)).await
    }
}
