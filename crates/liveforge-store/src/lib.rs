//! # LiveForge Store
//!
//! The patch store and applicator: the single owner of a page's current
//! patch state. It (re)applies markup and style through two managed
//! elements, executes injected script behind a capability-scoped contract,
//! and tears script side effects down before the next script runs.
//!
//! ## Core Concepts
//!
//! - **PatchStore**: owns the state, the managed elements, and the script
//!   effect set. One instance per page; constructed explicitly so tests can
//!   run many independent instances.
//! - **PageHost**: abstraction over the host page. The store never assumes
//!   a concrete document implementation.
//! - **ScriptEngine**: the execution contract for model-supplied script.
//!   Injected code sees only the minimal [`ScriptApi`] surface:
//!   append-to-body and register-cleanup.
//! - **StoreHandle**: actor-style front end. Requests are processed one at
//!   a time in arrival order; each gets exactly one reply.

pub mod handle;
pub mod host;
pub mod script;
pub mod store;

pub use handle::StoreHandle;
pub use host::{DetachedElement, ElementId, InMemoryPage, PageHost};
pub use script::{DisabledScriptEngine, ScriptApi, ScriptEffectSet, ScriptEngine, ScriptError};
pub use store::PatchStore;
