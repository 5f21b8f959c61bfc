//! Actor front end for the patch store.
//!
//! The store itself is synchronous and single-owner. `StoreHandle::spawn`
//! moves it into a dedicated task that processes requests one at a time in
//! arrival order; callers hold a cheap cloneable handle and await exactly
//! one reply per request. All payloads cross the channel by value.

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use liveforge_protocols::error::StoreError;
use liveforge_protocols::message::{StoreMessage, StoreReply};
use liveforge_protocols::patch::{PatchRequest, PatchState};

use crate::host::PageHost;
use crate::script::ScriptEngine;
use crate::store::PatchStore;

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;

const COMMAND_BUFFER: usize = 32;

enum StoreCommand {
    Apply(PatchRequest, oneshot::Sender<Result<PatchState, StoreError>>),
    Reset(oneshot::Sender<PatchState>),
    GetState(oneshot::Sender<PatchState>),
}

/// Cloneable client for a spawned patch store task.
#[derive(Clone, Debug)]
pub struct StoreHandle {
    tx: mpsc::Sender<StoreCommand>,
}

impl StoreHandle {
    /// Move the store into its own task and return a handle to it.
    pub fn spawn<H, E>(mut store: PatchStore<H, E>) -> Self
    where
        H: PageHost + 'static,
        E: ScriptEngine + 'static,
    {
        let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    StoreCommand::Apply(request, reply) => {
                        let _ = reply.send(store.apply(&request));
                    }
                    StoreCommand::Reset(reply) => {
                        let _ = reply.send(store.reset());
                    }
                    StoreCommand::GetState(reply) => {
                        let _ = reply.send(store.state().clone());
                    }
                }
            }
            debug!("Patch store task stopped");
        });
        Self { tx }
    }

    /// Apply a partial patch and await the committed state.
    pub async fn apply(&self, request: PatchRequest) -> Result<PatchState, StoreError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(StoreCommand::Apply(request, reply_tx)).await?;
        reply_rx
            .await
            .map_err(|e| StoreError::ChannelClosed(e.to_string()))?
    }

    /// Reset the page to its clean state.
    pub async fn reset(&self) -> Result<PatchState, StoreError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(StoreCommand::Reset(reply_tx)).await?;
        reply_rx
            .await
            .map_err(|e| StoreError::ChannelClosed(e.to_string()))
    }

    /// Read the current state.
    pub async fn get_state(&self) -> Result<PatchState, StoreError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(StoreCommand::GetState(reply_tx)).await?;
        reply_rx
            .await
            .map_err(|e| StoreError::ChannelClosed(e.to_string()))
    }

    /// Serve a wire-level message, producing the wire-level reply.
    pub async fn dispatch(&self, message: StoreMessage) -> StoreReply {
        match message {
            StoreMessage::Apply(request) => StoreReply::from(self.apply(request).await),
            StoreMessage::Reset => StoreReply::from(self.reset().await),
            StoreMessage::GetState => StoreReply::from(self.get_state().await),
        }
    }

    async fn send(&self, command: StoreCommand) -> Result<(), StoreError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| StoreError::ChannelClosed("store task is gone".to_string()))
    }
}
