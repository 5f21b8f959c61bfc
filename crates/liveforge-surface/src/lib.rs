//! # LiveForge Surface
//!
//! The privileged control surface. It addresses exactly one active target
//! (a page's patch store) at a time, sequences Apply/Reset/GetState
//! requests against it, forwards generate requests to the broker, and owns
//! the persisted settings. It is the terminal consumer of errors from the
//! other components; nothing here retries automatically.

pub mod settings;
pub mod surface;
pub mod targets;

pub use settings::{Settings, SettingsError, SettingsStore};
pub use surface::Surface;
pub use targets::{TargetId, TargetRegistry};
