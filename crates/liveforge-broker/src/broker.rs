//! The generation broker.

use std::time::Duration;

use tracing::debug;

use liveforge_protocols::error::BrokerError;
use liveforge_protocols::message::{GenerateReply, GenerateRequest};
use liveforge_protocols::patch::{Patch, PatchState};
use liveforge_protocols::provider::{ProviderConfig, ProviderKind};

use crate::parse::parse_patch_text;
use crate::prompt::Prompts;
use crate::providers::{OllamaProvider, OpenAiCompatibleProvider, PatchProvider};

#[cfg(test)]
#[path = "broker_tests.rs"]
mod tests;

/// Bound on one outbound model call. Expiry surfaces as a distinct
/// timeout error; nothing retries automatically.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maps instruction + current patch to a new patch through the configured
/// provider.
pub struct Broker {
    client: reqwest::Client,
    timeout: Duration,
    openai: OpenAiCompatibleProvider,
    ollama: OllamaProvider,
}

impl Default for Broker {
    fn default() -> Self {
        Self::new()
    }
}

impl Broker {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Broker with a custom outbound timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
            openai: OpenAiCompatibleProvider,
            ollama: OllamaProvider,
        }
    }

    /// Generate a new patch from a free-text instruction and the current
    /// patch. Fails with a distinguishable error rather than returning a
    /// garbage patch.
    pub async fn generate(
        &self,
        instruction: &str,
        current: &PatchState,
        config: &ProviderConfig,
    ) -> Result<Patch, BrokerError> {
        let prompts = Prompts::build(instruction, current);
        let provider: &dyn PatchProvider = match config.provider {
            ProviderKind::OpenAiCompatible => &self.openai,
            ProviderKind::Ollama => &self.ollama,
        };
        debug!(
            provider = provider.id(),
            model = config.effective_model(),
            "Requesting patch generation"
        );
        let raw = provider
            .fetch_patch_text(&self.client, config, &prompts, self.timeout)
            .await?;
        parse_patch_text(&raw)
    }

    /// Serve a wire-level generate request, producing the wire-level
    /// reply with the explanation split out of the patch.
    pub async fn serve(&self, request: GenerateRequest) -> GenerateReply {
        match self
            .generate(
                &request.instruction,
                &request.current_patch,
                &request.provider_config,
            )
            .await
        {
            Ok(mut patch) => {
                let explanation = std::mem::take(&mut patch.explanation);
                GenerateReply::success(patch, explanation)
            }
            Err(e) => GenerateReply::failure(e.to_string()),
        }
    }
}
