//! Cross-context message contracts.
//!
//! Each request expects exactly one response, never a stream. The wire
//! shapes mirror the transport table: replies carry an `ok` flag with
//! either a `state`/`patch` payload or an `error` string.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::patch::{Patch, PatchRequest, PatchState};
use crate::provider::ProviderConfig;

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;

/// A request addressed to the patch store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StoreMessage {
    /// Apply a partial patch; omitted fields retain their current value.
    Apply(PatchRequest),
    /// Clear all injected content and return to the clean state.
    Reset,
    /// Read the current state verbatim.
    GetState,
}

/// Response from the patch store to any [`StoreMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreReply {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<PatchState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StoreReply {
    /// A successful reply carrying the resulting state.
    pub fn success(state: PatchState) -> Self {
        Self {
            ok: true,
            state: Some(state),
            error: None,
        }
    }

    /// A failed reply carrying an error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            state: None,
            error: Some(error.into()),
        }
    }

    /// Convert back into a result for in-process consumers.
    pub fn into_result(self) -> Result<PatchState, StoreError> {
        if self.ok {
            Ok(self.state.unwrap_or_default())
        } else {
            Err(StoreError::Injection(self.error.unwrap_or_default()))
        }
    }
}

impl From<Result<PatchState, StoreError>> for StoreReply {
    fn from(result: Result<PatchState, StoreError>) -> Self {
        match result {
            Ok(state) => Self::success(state),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// A generation request addressed to the broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Free-text instruction describing the desired change.
    pub instruction: String,
    /// The currently committed patch, given to the model as context.
    #[serde(default)]
    pub current_patch: PatchState,
    /// Backend selection and credentials.
    pub provider_config: ProviderConfig,
}

/// Response from the broker to a [`GenerateRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateReply {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Patch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateReply {
    /// A successful reply carrying the generated patch and explanation.
    pub fn success(patch: Patch, explanation: impl Into<String>) -> Self {
        Self {
            ok: true,
            patch: Some(patch),
            explanation: Some(explanation.into()),
            error: None,
        }
    }

    /// A failed reply carrying an error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            patch: None,
            explanation: None,
            error: Some(error.into()),
        }
    }
}
