use super::*;

#[test]
fn test_default_config_is_key_authenticated() {
    let config = ProviderConfig::default();
    assert_eq!(config.provider, ProviderKind::OpenAiCompatible);
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.model, DEFAULT_MODEL);
    assert!(config.api_key.is_empty());
}

#[test]
fn test_ollama_config_defaults() {
    let config = ProviderConfig::ollama();
    assert_eq!(config.provider, ProviderKind::Ollama);
    assert_eq!(config.endpoint, DEFAULT_OLLAMA_ENDPOINT);
    assert_eq!(config.model, DEFAULT_OLLAMA_MODEL);
}

#[test]
fn test_effective_endpoint_trims_whitespace() {
    let config = ProviderConfig::default().with_endpoint("  https://example.test/v1  ");
    assert_eq!(config.effective_endpoint(), "https://example.test/v1");
}

#[test]
fn test_effective_endpoint_falls_back_to_default() {
    let config = ProviderConfig::ollama().with_endpoint("");
    assert_eq!(config.effective_endpoint(), DEFAULT_OLLAMA_ENDPOINT);
}

#[test]
fn test_effective_model_falls_back_to_default() {
    let config = ProviderConfig::default().with_model("   ");
    assert_eq!(config.effective_model(), DEFAULT_MODEL);
}

#[test]
fn test_provider_kind_serde_names() {
    assert_eq!(
        serde_json::to_string(&ProviderKind::OpenAiCompatible).unwrap(),
        "\"open_ai_compatible\""
    );
    assert_eq!(serde_json::to_string(&ProviderKind::Ollama).unwrap(), "\"ollama\"");
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: ProviderConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.provider, ProviderKind::OpenAiCompatible);
    assert!(config.endpoint.is_empty());
    assert_eq!(config.effective_endpoint(), DEFAULT_ENDPOINT);
}
