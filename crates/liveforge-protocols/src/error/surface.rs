//! Control surface errors.
//!
//! The surface is the terminal consumer: lower-level failures propagate up
//! into it and are rendered for the user; nothing retries automatically.

use thiserror::Error;

use super::{BrokerError, StoreError};

/// Errors surfaced by the control surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// No page is registered as the active target.
    #[error("No active target")]
    NoActiveTarget,

    /// The named target is not registered.
    #[error("Unknown target: {0}")]
    UnknownTarget(String),

    /// A generate request was issued with an empty instruction.
    #[error("Instruction must not be empty")]
    EmptyInstruction,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Broker(#[from] BrokerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_active_target_message() {
        assert_eq!(SurfaceError::NoActiveTarget.to_string(), "No active target");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err = SurfaceError::from(StoreError::Injection("boom".to_string()));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_broker_error_is_transparent() {
        let err = SurfaceError::from(BrokerError::Timeout(30));
        assert!(err.to_string().contains("Timeout"));
    }
}
