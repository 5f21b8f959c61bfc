//! Patch payload types.
//!
//! A **patch** is a bundle of markup, style, and script text describing a
//! page modification. `PatchState` is the committed form held by the patch
//! store; `PatchRequest` is the partial form sent by callers (omitted
//! fields retain their current value); `Patch` is the generated form, which
//! additionally carries an advisory explanation.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;

/// The committed patch state of one page: what has been injected.
///
/// All-empty means the page is clean (unmodified).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchState {
    /// HTML fragment rendered inside the managed container.
    #[serde(default)]
    pub markup: String,
    /// CSS active via the managed style element.
    #[serde(default)]
    pub style: String,
    /// Source of the last executed script. Kept for display and
    /// round-tripping; re-execution is not idempotent.
    #[serde(default)]
    pub script: String,
}

impl PatchState {
    /// An all-empty state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether every field is empty (the page is clean).
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.style.is_empty() && self.script.is_empty()
    }

    /// Compute the next state by merging a partial request over this state.
    /// Omitted request fields keep their current value.
    pub fn merged(&self, request: &PatchRequest) -> PatchState {
        PatchState {
            markup: request.markup.clone().unwrap_or_else(|| self.markup.clone()),
            style: request.style.clone().unwrap_or_else(|| self.style.clone()),
            script: request.script.clone().unwrap_or_else(|| self.script.clone()),
        }
    }
}

/// A partial patch: the payload of an Apply request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl PatchRequest {
    /// An empty request (applies nothing, retains everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the markup fragment.
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = Some(markup.into());
        self
    }

    /// Set the style rules.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the script source.
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }
}

impl From<Patch> for PatchRequest {
    /// A generated patch applies all three fields, including empty ones,
    /// so a generation that drops a field clears it on the page.
    fn from(patch: Patch) -> Self {
        Self {
            markup: Some(patch.markup),
            style: Some(patch.style),
            script: Some(patch.script),
        }
    }
}

/// A generated patch: markup/style/script plus an advisory explanation.
///
/// The explanation is human-readable status text and never affects state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    #[serde(default)]
    pub markup: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub script: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub explanation: String,
}

impl Patch {
    /// Build a patch from a committed state, without an explanation.
    pub fn from_state(state: PatchState) -> Self {
        Self {
            markup: state.markup,
            style: state.style,
            script: state.script,
            explanation: String::new(),
        }
    }
}
