//! Identity-provider adapters for an OAuth2 reverse-proxy authentication layer.
//!
//! An adapter knows one provider's endpoints and userinfo shape. The host
//! runs the OAuth2 flow, then asks the adapter to validate access tokens and
//! to enrich sessions with the user's identity.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use proxy_auth::{KuProvider, Provider, ProviderData, SessionState};
//!
//! let data = ProviderData::builder()
//!     .client_id("your-client-id")
//!     .client_secret("your-client-secret")
//!     .build()?;
//! let provider = KuProvider::new(data);
//!
//! let mut session = SessionState::with_access_token(token);
//! if provider.validate_session(&session).await {
//!     provider.enrich_session(&mut session).await?;
//!     println!("User: {}", session.email);
//! }
//! ```

mod error;
mod identity;
mod provider;
mod provider_data;
mod providers;
mod session;
mod validator;

pub use error::{ProviderError, Result};
pub use identity::{IdentityValue, extract_identity, get_path};
pub use provider::Provider;
pub use provider_data::{ProviderData, ProviderDataBuilder, ProviderDefaults};
pub use providers::*;
pub use session::SessionState;
pub use validator::{HttpTokenValidator, TokenValidator, authorization_header, bearer_header};
