//! Engine event pump
//!
//! Drains a channel of engine events into a shared controller, applying
//! each one as a sequential state transition.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use super::DictationController;
use crate::engine::EngineEvent;

/// Spawn a task that forwards engine events to the controller
///
/// The task ends when the sender side of the channel is dropped. The
/// controller lock is held only for the synchronous application of one
/// event, so request calls interleave between events rather than racing
/// them.
pub fn spawn_event_pump(
    mut event_rx: mpsc::Receiver<EngineEvent>,
    controller: Arc<Mutex<DictationController>>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            controller.lock().await.handle_event(event);
        }
        debug!("engine event channel closed, pump exiting");
    })
}
