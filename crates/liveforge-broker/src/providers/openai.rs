//! Key-authenticated OpenAI-compatible chat-completions provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use liveforge_protocols::error::BrokerError;
use liveforge_protocols::provider::ProviderConfig;

use crate::prompt::Prompts;

use super::{map_transport_error, read_error_body, PatchProvider};

#[cfg(test)]
#[path = "openai_tests.rs"]
mod tests;

const TEMPERATURE: f32 = 0.2;

/// Chat-completions request body.
#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ApiMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Provider for hosted chat-completions endpoints authenticated with a
/// bearer token (OpenAI, OpenRouter, and compatibles).
#[derive(Debug, Default)]
pub struct OpenAiCompatibleProvider;

impl OpenAiCompatibleProvider {
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
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait]
impl PatchProvider for OpenAiCompatibleProvider {
    fn id(&self) -> &str {
        "open_ai_compatible"
    }

    async fn fetch_patch_text(
        &self,
        client: &reqwest::Client,
        config: &ProviderConfig,
        prompts: &Prompts,
        timeout: Duration,
    ) -> Result<String, BrokerError> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(BrokerError::ProviderConfig(
                "an API key is required for this provider".to_string(),
            ));
        }

        let response = client
            .post(config.effective_endpoint())
            .bearer_auth(api_key)
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
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                BrokerError::MalformedOutput("model reply contained no content".to_string())
            })
    }
}
