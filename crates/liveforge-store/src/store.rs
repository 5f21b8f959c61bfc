//! The patch store and applicator.

use tracing::debug;

use liveforge_protocols::error::StoreError;
use liveforge_protocols::patch::{PatchRequest, PatchState};

use crate::host::{ElementId, PageHost};
use crate::script::{ScriptApi, ScriptEffectSet, ScriptEngine};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Owner of one page's patch state and managed elements.
///
/// The store is Clean (all fields empty, the initial state) or Patched.
/// Apply moves Clean→Patched or Patched→Patched; reset moves anything back
/// to Clean. Apply is atomic from the caller's point of view: there is no
/// observable "applying" state.
///
/// Constructed from an owned host and engine; no global state, so tests
/// can run any number of independent stores.
pub struct PatchStore<H: PageHost, E: ScriptEngine> {
    host: H,
    engine: E,
    state: PatchState,
    style_element: Option<ElementId>,
    container_element: Option<ElementId>,
    effects: ScriptEffectSet,
}

impl<H: PageHost, E: ScriptEngine> PatchStore<H, E> {
    pub fn new(host: H, engine: E) -> Self {
        Self {
            host,
            engine,
            state: PatchState::empty(),
            style_element: None,
            container_element: None,
            effects: ScriptEffectSet::new(),
        }
    }

    /// The host page. Mainly useful to inspect applied content.
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current state, verbatim. No side effects.
    pub fn state(&self) -> &PatchState {
        &self.state
    }

    /// Apply a partial patch. Omitted fields retain their current value.
    ///
    /// Style and markup are written from the merged state on every apply,
    /// re-creating a managed element if the page lost it. The script pass
    /// only runs when the request carries a `script` field: pending
    /// cleanups from the previous script are drained first, then a
    /// non-empty script executes synchronously through the engine.
    ///
    /// If the script fails, markup and style stay applied and committed,
    /// the `script` field keeps its pre-call value, and the error is
    /// returned. This partial-failure policy is deliberate: visual changes
    /// stick, the behavioral change is discarded.
    pub fn apply(&mut self, request: &PatchRequest) -> Result<PatchState, StoreError> {
        let next = self.state.merged(request);

        let style_element = self.ensure_style_element();
        self.host.set_style_content(style_element, &next.style);

        let container_element = self.ensure_container_element();
        self.host.set_container_markup(container_element, &next.markup);

        if let Some(script) = request.script.as_deref() {
            self.effects.run_all();
            if !script.trim().is_empty() {
                let mut api = ScriptApi::new(&mut self.host, &mut self.effects);
                if let Err(e) = self.engine.execute(script, &mut api) {
                    self.state = PatchState {
                        script: self.state.script.clone(),
                        ..next
                    };
                    return Err(StoreError::Injection(e.to_string()));
                }
            }
        }

        self.state = next;
        debug!(
            markup = self.state.markup.len(),
            style = self.state.style.len(),
            script = self.state.script.len(),
            "Patch applied"
        );
        Ok(self.state.clone())
    }

    /// Return to the clean state. Never fails: clearing content and
    /// draining cleanups have no exception surface.
    pub fn reset(&mut self) -> PatchState {
        if let Some(id) = self.style_element {
            self.host.set_style_content(id, "");
        }
        if let Some(id) = self.container_element {
            self.host.set_container_markup(id, "");
        }
        // The empty-script pass: drain pending cleanups, execute nothing.
        self.effects.run_all();
        self.state = PatchState::empty();
        debug!("Patch state reset");
        self.state.clone()
    }

    fn ensure_style_element(&mut self) -> ElementId {
        match self.style_element {
            Some(id) if self.host.is_attached(id) => id,
            _ => {
                let id = self.host.create_style_element();
                self.style_element = Some(id);
                id
            }
        }
    }

    fn ensure_container_element(&mut self) -> ElementId {
        match self.container_element {
            Some(id) if self.host.is_attached(id) => id,
            _ => {
                let id = self.host.create_container_element();
                self.container_element = Some(id);
                id
            }
        }
    }
}
