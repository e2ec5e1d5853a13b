use std::rc::Rc;

use api::{ActivationResult, ReqwestTransport, Transport};
use async_trait::async_trait;

/// Transport used by [`crate::ConfirmationPage`].
///
/// Provide one as context above the page to replace the default reqwest
/// client.
#[derive(Clone)]
pub struct ActivationTransport(Rc<dyn Transport>);

impl ActivationTransport {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self(Rc::new(transport))
    }
}

impl Default for ActivationTransport {
    fn default() -> Self {
        Self::new(ReqwestTransport::default())
    }
}

#[async_trait(?Send)]
impl Transport for ActivationTransport {
    async fn put(&self, url: &str) -> ActivationResult<u16> {
        self.0.put(url).await
    }
}
