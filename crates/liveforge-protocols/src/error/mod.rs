//! Error types for the LiveForge protocol layer.

mod broker;
mod store;
mod surface;

pub use broker::*;
pub use store::*;
pub use surface::*;
