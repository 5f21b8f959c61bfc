//! Script execution contract and side-effect tracking.
//!
//! Model-supplied script is untrusted text. The store does not interpret
//! it; a [`ScriptEngine`] does, and whatever the engine is, injected code
//! only reaches the page through [`ScriptApi`]: append an element to the
//! body, or register a cleanup to run before the next script (or reset).
//!
//! Cleanup is advisory. A failing cleanup callback is logged and skipped;
//! it never aborts the apply or reset that triggered it. The contract also
//! only covers effects a script registered for: arbitrary global mutation
//! by a script is not undone.

use thiserror::Error;
use tracing::warn;

use crate::host::{DetachedElement, PageHost};

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;

/// Error raised by script execution or by a cleanup callback.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ScriptError(String);

impl ScriptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A cleanup callback registered by injected script.
pub type Cleanup = Box<dyn FnOnce() -> Result<(), ScriptError> + Send>;

/// Ordered cleanup callbacks registered by the most recent script.
///
/// Owned exclusively by the patch store; fully drained before any new
/// script executes and on reset.
#[derive(Default)]
pub struct ScriptEffectSet {
    cleanups: Vec<Cleanup>,
}

impl ScriptEffectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks run in registration order.
    pub fn register(&mut self, cleanup: Cleanup) {
        self.cleanups.push(cleanup);
    }

    pub fn len(&self) -> usize {
        self.cleanups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleanups.is_empty()
    }

    /// Run and clear every pending callback. Failures are logged and
    /// skipped; the drain always completes.
    pub fn run_all(&mut self) {
        for cleanup in self.cleanups.drain(..) {
            if let Err(e) = cleanup() {
                warn!("Script cleanup callback failed: {e}");
            }
        }
    }
}

impl std::fmt::Debug for ScriptEffectSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptEffectSet")
            .field("pending", &self.cleanups.len())
            .finish()
    }
}

/// The capability surface handed to injected script.
///
/// This is the whole API: anything else a script does to shared state is
/// outside the cleanup contract.
pub struct ScriptApi<'a> {
    host: &'a mut dyn PageHost,
    effects: &'a mut ScriptEffectSet,
}

impl<'a> ScriptApi<'a> {
    pub(crate) fn new(host: &'a mut dyn PageHost, effects: &'a mut ScriptEffectSet) -> Self {
        Self { host, effects }
    }

    /// Append an element to the page body.
    pub fn append_to_body(&mut self, element: DetachedElement) {
        self.host.append_to_body(element);
    }

    /// Register a cleanup to run before the next script execution or on
    /// reset.
    pub fn on_cleanup(
        &mut self,
        cleanup: impl FnOnce() -> Result<(), ScriptError> + Send + 'static,
    ) {
        self.effects.register(Box::new(cleanup));
    }
}

/// Executes injected script source against the capability surface.
///
/// Execution is synchronous: when `execute` returns, the script has run to
/// completion (or failed).
pub trait ScriptEngine: Send {
    fn execute(&mut self, source: &str, api: &mut ScriptApi<'_>) -> Result<(), ScriptError>;
}

/// Engine for hosts that cannot run script. Every non-empty script fails;
/// markup and style from the same apply still land, per the partial-failure
/// policy.
#[derive(Debug, Default)]
pub struct DisabledScriptEngine;

impl ScriptEngine for DisabledScriptEngine {
    fn execute(&mut self, _source: &str, _api: &mut ScriptApi<'_>) -> Result<(), ScriptError> {
        Err(ScriptError::new(
            "script execution is not available on this host",
        ))
    }
}
