//! This crate contains the account activation client and the server
//! functions that hand its configuration to the browser.
use dioxus::prelude::*;

pub mod activation;
pub mod config;
pub mod types;

mod error;

pub use activation::{ActivationClient, ActivationRequest, ReqwestTransport, Transport};
pub use config::ApiConfig;
pub use error::{ActivationError, ActivationResult};
pub use types::{ActivationOutcome, ActivationToken};

/// Where the browser should send activation requests.
#[get("/api/config")]
pub async fn public_config() -> Result<ApiConfig, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let cfg = ApiConfig::from_env();
        tracing::debug!(base_url = %cfg.base_url, "public_config");
        Ok(cfg)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("public_config is server-only"))
    }
}
