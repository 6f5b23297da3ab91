//! Identity-provider implementations.

mod ku;

pub use ku::{
    KU_DEFAULT_LOGIN_URL, KU_DEFAULT_REDEEM_URL, KU_DEFAULT_SCOPE, KU_DEFAULT_VALIDATE_URL,
    KU_PROVIDER_NAME, KuProvider,
};
