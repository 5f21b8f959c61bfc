//! Target registry.
//!
//! A target is one page with a running patch store. The surface only ever
//! addresses the active target; at most one target is active at a time.

use std::collections::HashMap;

use liveforge_protocols::error::SurfaceError;
use liveforge_store::StoreHandle;

#[cfg(test)]
#[path = "targets_tests.rs"]
mod tests;

/// Target unique identifier type.
pub type TargetId = String;

/// Registered targets plus the single active one.
#[derive(Default)]
pub struct TargetRegistry {
    targets: HashMap<TargetId, StoreHandle>,
    active: Option<TargetId>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target. The first registered target becomes active.
    pub fn register(&mut self, id: impl Into<TargetId>, handle: StoreHandle) {
        let id = id.into();
        if self.active.is_none() {
            self.active = Some(id.clone());
        }
        self.targets.insert(id, handle);
    }

    /// Make a registered target the active one.
    pub fn activate(&mut self, id: &str) -> Result<(), SurfaceError> {
        if !self.targets.contains_key(id) {
            return Err(SurfaceError::UnknownTarget(id.to_string()));
        }
        self.active = Some(id.to_string());
        Ok(())
    }

    /// The active target's store handle.
    pub fn active(&self) -> Result<&StoreHandle, SurfaceError> {
        self.active
            .as_deref()
            .and_then(|id| self.targets.get(id))
            .ok_or(SurfaceError::NoActiveTarget)
    }

    /// Id of the active target, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Remove a target; clears the active slot if it pointed there.
    pub fn remove(&mut self, id: &str) {
        self.targets.remove(id);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
