//! # LiveForge Protocols
//!
//! Shared protocol definitions for the LiveForge components:
//!
//! - **Patch types**: the unit of page modification exchanged between the
//!   generation broker, the control surface, and the patch store.
//! - **Messages**: request/response pairs crossing component boundaries.
//!   All payloads cross by serialized copy; no shared references.
//! - **Provider config**: the two supported model-backend shapes.
//! - **Errors**: per-domain error enums.
//!
//! This crate performs no I/O.

pub mod error;
pub mod message;
pub mod patch;
pub mod provider;

pub use message::{GenerateReply, GenerateRequest, StoreMessage, StoreReply};
pub use patch::{Patch, PatchRequest, PatchState};
pub use provider::{ProviderConfig, ProviderKind};
