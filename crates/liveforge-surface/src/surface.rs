//! The control surface client.

use std::mem;

use tracing::{debug, info};

use liveforge_broker::Broker;
use liveforge_protocols::error::SurfaceError;
use liveforge_protocols::patch::{Patch, PatchRequest, PatchState};
use liveforge_store::StoreHandle;

use crate::settings::Settings;
use crate::targets::{TargetId, TargetRegistry};

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;

/// Issues store and broker requests on behalf of the user.
///
/// Every request is a single request/response pair against the active
/// target; the surface sequences its own composite flows (hydrate,
/// generate-and-apply) so no two of its requests overlap.
pub struct Surface {
    targets: TargetRegistry,
    broker: Broker,
    settings: Settings,
}

impl Surface {
    pub fn new(broker: Broker, settings: Settings) -> Self {
        Self {
            targets: TargetRegistry::new(),
            broker,
            settings,
        }
    }

    /// Register a target page. The first one becomes active.
    pub fn register_target(&mut self, id: impl Into<TargetId>, handle: StoreHandle) {
        self.targets.register(id, handle);
    }

    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    pub fn targets_mut(&mut self) -> &mut TargetRegistry {
        &mut self.targets
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings used for subsequent generate requests.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Apply a partial patch to the active target.
    pub async fn apply(&self, request: PatchRequest) -> Result<PatchState, SurfaceError> {
        let store = self.targets.active()?;
        Ok(store.apply(request).await?)
    }

    /// Reset the active target to its clean state.
    pub async fn reset(&self) -> Result<PatchState, SurfaceError> {
        let store = self.targets.active()?;
        Ok(store.reset().await?)
    }

    /// Read the active target's current state.
    pub async fn get_state(&self) -> Result<PatchState, SurfaceError> {
        let store = self.targets.active()?;
        Ok(store.get_state().await?)
    }

    /// Generate a patch for the active target from a free-text
    /// instruction. The current state is read first and handed to the
    /// broker as context, so an absent target fails fast before any
    /// network traffic.
    pub async fn generate(&self, instruction: &str) -> Result<Patch, SurfaceError> {
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Err(SurfaceError::EmptyInstruction);
        }
        let current = self.get_state().await?;
        debug!(target_id = ?self.targets.active_id(), "Generating patch");
        Ok(self
            .broker
            .generate(instruction, &current, &self.settings.provider_config())
            .await?)
    }

    /// Generate and immediately apply, returning the committed state and
    /// the model's explanation.
    pub async fn generate_and_apply(
        &self,
        instruction: &str,
    ) -> Result<(PatchState, String), SurfaceError> {
        let mut patch = self.generate(instruction).await?;
        let explanation = mem::take(&mut patch.explanation);
        let state = self.apply(PatchRequest::from(patch)).await?;
        info!("Generated patch applied");
        Ok((state, explanation))
    }
}
