//! Provider implementations.
//!
//! A provider maps the uniform generate contract onto one backend shape
//! and returns the raw reply text; patch extraction happens in the broker.

mod ollama;
mod openai;

use std::time::Duration;

use async_trait::async_trait;

use liveforge_protocols::error::BrokerError;
use liveforge_protocols::provider::ProviderConfig;

use crate::prompt::Prompts;

pub use ollama::OllamaProvider;
pub use openai::OpenAiCompatibleProvider;

/// One backend shape behind the generate contract.
#[async_trait]
pub trait PatchProvider: Send + Sync {
    /// Provider ID.
    fn id(&self) -> &str;

    /// Send the prompts to the backend and return the raw reply text.
    ///
    /// Must validate required configuration before any network call.
    async fn fetch_patch_text(
        &self,
        client: &reqwest::Client,
        config: &ProviderConfig,
        prompts: &Prompts,
        timeout: Duration,
    ) -> Result<String, BrokerError>;
}

pub(crate) fn map_transport_error(error: reqwest::Error, timeout: Duration) -> BrokerError {
    if error.is_timeout() {
        BrokerError::Timeout(timeout.as_secs())
    } else {
        BrokerError::Network(error.to_string())
    }
}

pub(crate) async fn read_error_body(response: reqwest::Response) -> BrokerError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    BrokerError::Api { status, message }
}
