//! Patch store errors.

use thiserror::Error;

/// Errors surfaced by the patch store.
///
/// Reset and GetState never fail; Apply fails only when injected script
/// throws. `ChannelClosed` can only occur at the actor boundary, when the
/// store task has shut down.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Injected script threw during execution. Markup and style from the
    /// same apply remain committed; the script field does not advance.
    #[error("Injected script failed: {0}")]
    Injection(String),

    #[error("Patch store is no longer running: {0}")]
    ChannelClosed(String),
}
