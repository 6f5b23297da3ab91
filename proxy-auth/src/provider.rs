//! The contract every identity-provider adapter implements.

use async_trait::async_trait;

use crate::error::Result;
use crate::provider_data::ProviderData;
use crate::session::SessionState;

/// An identity-provider adapter.
///
/// Implementations are stateless after construction and shared across
/// requests, typically as `Arc<dyn Provider>`. Each call makes at most one
/// outbound request; dropping the returned future cancels it.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Configuration the adapter was built with, defaults applied.
    fn data(&self) -> &ProviderData;

    /// Populate the session's identity fields from the provider.
    ///
    /// On error the session is left untouched.
    async fn enrich_session(&self, session: &mut SessionState) -> Result<()>;

    /// Check whether the session's access token is still accepted.
    async fn validate_session(&self, session: &SessionState) -> bool;
}
