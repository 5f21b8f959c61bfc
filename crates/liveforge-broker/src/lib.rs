//! # LiveForge Broker
//!
//! Turns a natural-language instruction plus the current patch into a new
//! patch by calling a model backend. Two provider shapes are supported
//! behind one contract: a key-authenticated OpenAI-compatible endpoint and
//! an unauthenticated local Ollama endpoint.
//!
//! The backend's reply is untrusted: it may be strict JSON or free text
//! containing a JSON object. The parser extracts what it can and defaults
//! every missing or wrong-shaped field; irrecoverable output fails with a
//! distinguishable error instead of injecting garbage.

pub mod broker;
pub mod parse;
pub mod prompt;
pub mod providers;

pub use broker::{Broker, DEFAULT_TIMEOUT};
pub use parse::{parse_patch_text, DEFAULT_EXPLANATION};
pub use prompt::Prompts;
pub use providers::PatchProvider;
