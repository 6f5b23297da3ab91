//! Provider configuration shared by every adapter.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ProviderError, Result};

/// Endpoint and client configuration for one identity provider.
///
/// An empty string means the field is unset. Adapters fill unset fields with
/// their own defaults at construction; operators override a default by
/// setting the field beforehand.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderData {
    /// Display name of the provider.
    pub provider_name: String,
    /// OAuth2 client ID.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Authorization endpoint the user is redirected to.
    pub login_url: String,
    /// Token-exchange endpoint.
    pub redeem_url: String,
    /// Userinfo endpoint. Optional.
    pub profile_url: String,
    /// Token-validation endpoint.
    pub validate_url: String,
    /// Requested authorization scope.
    pub scope: String,
}

/// Canonical values an adapter applies to unset configuration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDefaults {
    pub name: &'static str,
    pub login_url: &'static str,
    pub redeem_url: &'static str,
    pub profile_url: Option<&'static str>,
    pub validate_url: &'static str,
    pub scope: &'static str,
}

impl ProviderData {
    /// Create a new builder.
    pub fn builder() -> ProviderDataBuilder {
        ProviderDataBuilder::default()
    }

    /// Load configuration from `{PREFIX}_*` environment variables.
    ///
    /// Reads `CLIENT_ID`, `CLIENT_SECRET`, `LOGIN_URL`, `REDEEM_URL`,
    /// `PROFILE_URL`, `VALIDATE_URL`, `SCOPE` and `PROVIDER_NAME`. Missing
    /// variables leave the field unset.
    pub fn from_env(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    fn from_lookup(prefix: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(&format!("{prefix}_{name}")).unwrap_or_default();
        ProviderDataBuilder {
            data: ProviderData {
                provider_name: get("PROVIDER_NAME"),
                client_id: get("CLIENT_ID"),
                client_secret: get("CLIENT_SECRET"),
                login_url: get("LOGIN_URL"),
                redeem_url: get("REDEEM_URL"),
                profile_url: get("PROFILE_URL"),
                validate_url: get("VALIDATE_URL"),
                scope: get("SCOPE"),
            },
        }
        .build()
    }

    /// Fill every unset field from `defaults`.
    ///
    /// Never overwrites a non-empty field and never fails.
    pub fn set_provider_defaults(&mut self, defaults: &ProviderDefaults) {
        fill(&mut self.provider_name, defaults.name);
        fill(&mut self.login_url, defaults.login_url);
        fill(&mut self.redeem_url, defaults.redeem_url);
        if let Some(profile_url) = defaults.profile_url {
            fill(&mut self.profile_url, profile_url);
        }
        fill(&mut self.validate_url, defaults.validate_url);
        fill(&mut self.scope, defaults.scope);
    }

    /// Endpoint to ask for the user's identity.
    ///
    /// The profile URL when set, otherwise the validation URL.
    pub fn identity_url(&self) -> &str {
        if self.profile_url.is_empty() { &self.validate_url } else { &self.profile_url }
    }
}

fn fill(field: &mut String, default: &str) {
    if field.is_empty() {
        *field = default.to_string();
    }
}

impl fmt::Debug for ProviderData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.client_secret.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("ProviderData")
            .field("provider_name", &self.provider_name)
            .field("client_id", &self.client_id)
            .field("client_secret", &secret)
            .field("login_url", &self.login_url)
            .field("redeem_url", &self.redeem_url)
            .field("profile_url", &self.profile_url)
            .field("validate_url", &self.validate_url)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Builder for [`ProviderData`] that checks URL syntax.
#[derive(Debug, Clone, Default)]
pub struct ProviderDataBuilder {
    data: ProviderData,
}

impl ProviderDataBuilder {
    /// Set the provider display name.
    pub fn provider_name(mut self, name: impl Into<String>) -> Self {
        self.data.provider_name = name.into();
        self
    }

    /// Set the OAuth2 client ID.
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.data.client_id = id.into();
        self
    }

    /// Set the OAuth2 client secret.
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        self.data.client_secret = secret.into();
        self
    }

    /// Set the authorization endpoint.
    pub fn login_url(mut self, url: impl Into<String>) -> Self {
        self.data.login_url = url.into();
        self
    }

    /// Set the token-exchange endpoint.
    pub fn redeem_url(mut self, url: impl Into<String>) -> Self {
        self.data.redeem_url = url.into();
        self
    }

    /// Set the userinfo endpoint.
    pub fn profile_url(mut self, url: impl Into<String>) -> Self {
        self.data.profile_url = url.into();
        self
    }

    /// Set the token-validation endpoint.
    pub fn validate_url(mut self, url: impl Into<String>) -> Self {
        self.data.validate_url = url.into();
        self
    }

    /// Set the requested scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.data.scope = scope.into();
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] if a non-empty URL field does not parse.
    pub fn build(self) -> Result<ProviderData> {
        let urls = [
            ("login_url", &self.data.login_url),
            ("redeem_url", &self.data.redeem_url),
            ("profile_url", &self.data.profile_url),
            ("validate_url", &self.data.validate_url),
        ];
        for (name, value) in urls {
            if value.is_empty() {
                continue;
            }
            url::Url::parse(value)
                .map_err(|e| ProviderError::Config(format!("invalid {name} '{value}': {e}")))?;
        }
        Ok(self.data)
    }
}
