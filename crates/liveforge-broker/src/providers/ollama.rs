//! Local Ollama chat provider. No credential; the request carries
//! `stream: false` and nested generation options.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use liveforge_protocols::error::BrokerError;
use liveforge_protocols::provider::ProviderConfig;

use crate::prompt::Prompts;

use super::{map_transport_error, read_error_body, PatchProvider};

#[cfg(test)]
#[path = "ollama_tests.rs"]
mod tests;

const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ApiMessage>,
    stream: bool,
    options: GenerationOptions,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct GenerationOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Provider for a local Ollama endpoint.
#[derive(Debug, Default)]
pub struct OllamaProvider;

impl OllamaProvider {
    fn build_request(config: &ProviderConfig, prompts: &Prompts) -> ApiRequest {
        ApiRequest {
            model: config.effective_model().to_string(),
            messages: vec![
                ApiMessage {
                    role: "system".to_string(),
                    content: prompts.system.clone(),
                },
                ApiMessage {
                    role: "user".to_string(),
                    content: prompts.user.clone(),
                },
            ],
            stream: false,
            options: GenerationOptions {
                temperature: TEMPERATURE,
            },
        }
    }
}

#[async_trait]
impl PatchProvider for OllamaProvider {
    fn id(&self) -> &str {
        "ollama"
    }

    async fn fetch_patch_text(
        &self,
        client: &reqwest::Client,
        config: &ProviderConfig,
        prompts: &Prompts,
        timeout: Duration,
    ) -> Result<String, BrokerError> {
        let response = client
            .post(config.effective_endpoint())
            .timeout(timeout)
            .json(&Self::build_request(config, prompts))
            .send()
            .await
            .map_err(|e| map_transport_error(e, timeout))?;

        if !response.status().is_success() {
            return Err(read_error_body(response).await);
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| BrokerError::Network(e.to_string()))?;

        api_response
            .message
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                BrokerError::MalformedOutput("Ollama reply contained no content".to_string())
            })
    }
}
