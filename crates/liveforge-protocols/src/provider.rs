//! Model-backend provider configuration.
//!
//! Two provider shapes are supported, mapped to one uniform generate
//! contract: a key-authenticated OpenAI-compatible endpoint, and a local
//! Ollama endpoint that requires no credential.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;

/// Default endpoint for the key-authenticated provider.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
/// Default model for the key-authenticated provider.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.1-8b-instruct:free";
/// Default endpoint for the local Ollama provider.
pub const DEFAULT_OLLAMA_ENDPOINT: &str = "http://127.0.0.1:11434/api/chat";
/// Default model for the local Ollama provider.
pub const DEFAULT_OLLAMA_MODEL: &str = "qwen2.5-coder:7b";

/// Which backend shape to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Hosted chat-completions endpoint, authenticated with a bearer token.
    #[default]
    OpenAiCompatible,
    /// Local Ollama endpoint, unauthenticated.
    Ollama,
}

/// Backend selection plus connection parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    /// Endpoint URL; empty means the provider's default.
    #[serde(default)]
    pub endpoint: String,
    /// Model identifier; empty means the provider's default.
    #[serde(default)]
    pub model: String,
    /// Credential for key-authenticated providers; ignored by Ollama.
    #[serde(default)]
    pub api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAiCompatible,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
        }
    }
}

impl ProviderConfig {
    /// Config for the key-authenticated provider with defaults filled in.
    pub fn open_ai_compatible(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Config for the local Ollama provider with defaults filled in.
    pub fn ollama() -> Self {
        Self {
            provider: ProviderKind::Ollama,
            endpoint: DEFAULT_OLLAMA_ENDPOINT.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            api_key: String::new(),
        }
    }

    /// Override the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Endpoint with whitespace trimmed and defaults applied.
    pub fn effective_endpoint(&self) -> &str {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            match self.provider {
                ProviderKind::OpenAiCompatible => DEFAULT_ENDPOINT,
                ProviderKind::Ollama => DEFAULT_OLLAMA_ENDPOINT,
            }
        } else {
            endpoint
        }
    }

    /// Model with whitespace trimmed and defaults applied.
    pub fn effective_model(&self) -> &str {
        let model = self.model.trim();
        if model.is_empty() {
            match self.provider {
                ProviderKind::OpenAiCompatible => DEFAULT_MODEL,
                ProviderKind::Ollama => DEFAULT_OLLAMA_MODEL,
            }
        } else {
            model
        }
    }
}
