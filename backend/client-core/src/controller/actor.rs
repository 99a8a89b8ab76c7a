//! Event-driven front door for [`ConversionController`].
//!
//! # Architecture
//!
//! - UI input is sent as [`Event`] messages over an mpsc channel
//! - A dedicated task owns the controller and processes messages sequentially
//! - Conversions run in their own task; the result comes back to the actor as
//!   a completion message, so other events are handled while a request waits
//! - After every message the actor publishes an [`AppState`] snapshot on a
//!   `watch` channel for renderers
//!
//! The actor stops once every [`ControllerHandle`] is dropped. Callers that
//! are about to exit use [`ControllerHandle::settle`] first so queued events
//! and an in-flight conversion are applied.

use super::{AppState, CompletedConversion, ConversionController};
use crate::error::controller::ControllerError;

use common::ErrorLocation;

use std::panic::Location;

use log::{debug, info, warn};
use tokio::sync::{mpsc, oneshot, watch};

const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Discrete user input, each mapped to one controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user replaced the source text.
    SourceEdited(String),

    /// Convert button.
    Convert,

    /// Copy button.
    CopyOutput,

    /// Load Example button.
    LoadExample,
}

enum ActorMessage {
    Input(Event),
    ConversionFinished(CompletedConversion),
    /// Answered once every message queued before it has been handled.
    Flush(oneshot::Sender<()>),
}

/// Cloneable handle for dispatching events and reading state.
#[derive(Clone)]
pub struct ControllerHandle {
    command_tx: mpsc::Sender<ActorMessage>,
    state_rx: watch::Receiver<AppState>,
}

impl ControllerHandle {
    /// Queue an event for the controller.
    pub async fn dispatch(&self, event: Event) -> Result<(), ControllerError> {
        self.command_tx
            .send(ActorMessage::Input(event))
            .await
            .map_err(|e| ControllerError::Dispatch {
                message: format!("Controller actor died: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Wait until every event dispatched so far has been handled and no
    /// conversion is in flight, then return the resulting state.
    ///
    /// Bounded by the conversion client's request timeout.
    pub async fn settle(&self) -> Result<AppState, ControllerError> {
        let (done_tx, done_rx) = oneshot::channel();
        self.command_tx
            .send(ActorMessage::Flush(done_tx))
            .await
            .map_err(|e| ControllerError::Dispatch {
                message: format!("Controller actor died: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        done_rx.await.map_err(|e| ControllerError::Dispatch {
            message: format!("Controller actor dropped flush request: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut state_rx = self.state_rx.clone();
        let state = state_rx
            .wait_for(|state| !state.converting)
            .await
            .map_err(|e| ControllerError::Dispatch {
                message: format!("Controller actor stopped mid-conversion: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .clone();

        Ok(state)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> AppState {
        self.state_rx.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state_rx.clone()
    }
}

/// Move `controller` into a new actor task and return its handle.
///
/// Must be called from within a tokio runtime.
pub fn spawn_controller(controller: ConversionController) -> ControllerHandle {
    let (command_tx, command_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let (state_tx, state_rx) = watch::channel(controller.state().clone());

    let completion_tx = command_tx.downgrade();
    tokio::spawn(controller_actor(controller, command_rx, completion_tx, state_tx));
    info!("Controller actor spawned");

    ControllerHandle {
        command_tx,
        state_rx,
    }
}

async fn controller_actor(
    mut controller: ConversionController,
    mut command_rx: mpsc::Receiver<ActorMessage>,
    completion_tx: mpsc::WeakSender<ActorMessage>,
    state_tx: watch::Sender<AppState>,
) {
    info!("Controller actor started");

    while let Some(message) = command_rx.recv().await {
        match message {
            ActorMessage::Input(event) => {
                debug!("Handling event: {}", event_name(&event));
                handle_event(&mut controller, event, &completion_tx);
            }
            ActorMessage::ConversionFinished(completed) => {
                // Failures are already surfaced as the status notice.
                let _ = controller.finish_convert(completed);
            }
            ActorMessage::Flush(done_tx) => {
                debug!("Flush requested");
                // The requester may have given up waiting.
                let _ = done_tx.send(());
                continue;
            }
        }

        state_tx.send_replace(controller.state().clone());
    }

    info!("Controller actor stopped");
}

fn handle_event(
    controller: &mut ConversionController,
    event: Event,
    completion_tx: &mpsc::WeakSender<ActorMessage>,
) {
    match event {
        Event::SourceEdited(text) => controller.edit_source(text),
        Event::Convert => {
            let Ok(pending) = controller.begin_convert() else {
                return;
            };

            let completion_tx = completion_tx.clone();
            tokio::spawn(async move {
                let completed = pending.run().await;
                let request_id = completed.request_id;

                match completion_tx.upgrade() {
                    Some(tx) => {
                        if tx
                            .send(ActorMessage::ConversionFinished(completed))
                            .await
                            .is_err()
                        {
                            warn!("[{request_id}] Controller stopped before conversion finished");
                        }
                    }
                    None => {
                        warn!("[{request_id}] Controller stopped before conversion finished");
                    }
                }
            });
        }
        Event::CopyOutput => {
            // Failures are already surfaced as the status notice.
            let _ = controller.copy_output();
        }
        Event::LoadExample => controller.load_example(),
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SourceEdited(_) => "SourceEdited",
        Event::Convert => "Convert",
        Event::CopyOutput => "CopyOutput",
        Event::LoadExample => "LoadExample",
    }
}
