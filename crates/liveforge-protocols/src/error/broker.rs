//! Generation broker errors.

use thiserror::Error;

/// Errors surfaced by the generation broker.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// The selected provider is missing required configuration. Raised
    /// before any network call.
    #[error("Provider configuration error: {0}")]
    ProviderConfig(String),

    /// The backend's reply did not contain an extractable patch object.
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    /// The endpoint answered with a non-success status. The response body
    /// is included for diagnosis.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),
}
