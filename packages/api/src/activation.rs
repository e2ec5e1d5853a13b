use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::{ActivationError, ActivationResult};
use crate::types::ActivationToken;

const ACTIVATE_PATH: &str = "/users/activate/";

/// One `PUT {base}/users/activate/{token}` call. Carries no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationRequest {
    url: String,
}

impl ActivationRequest {
    pub fn new(config: &ApiConfig, token: &ActivationToken) -> Self {
        Self {
            url: format!("{}{}{}", config.base_url, ACTIVATE_PATH, token.as_str()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Sends a bodiless PUT and reports the response status.
///
/// Not `Send`: in the browser, reqwest futures are bound to the JS event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn put(&self, url: &str) -> ActivationResult<u16>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn put(&self, url: &str) -> ActivationResult<u16> {
        (**self).put(url).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn put(&self, url: &str) -> ActivationResult<u16> {
        let response = self.http_client.put(url).send().await?;
        Ok(response.status().as_u16())
    }
}

#[derive(Debug, Clone)]
pub struct ActivationClient<T = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
}

impl ActivationClient<ReqwestTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }
}

impl<T: Transport> ActivationClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn request(&self, token: &ActivationToken) -> ActivationRequest {
        ActivationRequest::new(&self.config, token)
    }

    /// Exactly one attempt; any 2xx counts as activated.
    pub async fn activate(&self, token: &ActivationToken) -> ActivationResult<()> {
        let request = self.request(token);
        tracing::debug!(token_len = token.as_str().len(), "activation: sending request");

        let status = self.transport.put(request.url()).await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ActivationError::Rejected { status })
        }
    }
}
