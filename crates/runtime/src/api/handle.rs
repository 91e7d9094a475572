use tokio::sync::{broadcast, oneshot};
use tokio::task::JoinHandle;

use crate::api::{Result, RuntimeError};
use crate::events::{EncounterEvent, EncounterReport};

/// Client-facing handle to a running encounter.
///
/// Dropping the handle does not stop the fight; the worker keeps running until a
/// side is defeated. Event receivers close once the worker exits.
pub struct EncounterHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    event_tx: broadcast::WeakSender<EncounterEvent>,
    /// Created before the worker was spawned, so it misses nothing.
    first_rx: Option<broadcast::Receiver<EncounterEvent>>,
    worker: JoinHandle<EncounterReport>,
}

impl EncounterHandle {
    pub(crate) fn new(
        stop_tx: oneshot::Sender<()>,
        event_tx: broadcast::WeakSender<EncounterEvent>,
        first_rx: broadcast::Receiver<EncounterEvent>,
        worker: JoinHandle<EncounterReport>,
    ) -> Self {
        Self {
            stop_tx: Some(stop_tx),
            event_tx,
            first_rx: Some(first_rx),
            worker,
        }
    }

    /// Subscribe to combat events.
    ///
    /// The first call returns a receiver that has seen every event since the fight
    /// started. Later receivers only see events published after they subscribe;
    /// once the worker has exited they are already closed.
    pub fn subscribe(&mut self) -> broadcast::Receiver<EncounterEvent> {
        if let Some(rx) = self.first_rx.take() {
            return rx;
        }

        match self.event_tx.upgrade() {
            Some(event_tx) => event_tx.subscribe(),
            None => broadcast::channel(1).1,
        }
    }

    /// Ask the worker to abort the fight without a winner.
    ///
    /// Returns whether the request was handed to the worker: false if a stop was
    /// already requested or the worker has exited. A request that races the final
    /// blow can still return true; the report then names the winner, since a
    /// finished fight ignores stops.
    pub fn stop(&mut self) -> bool {
        if self.worker.is_finished() {
            self.stop_tx = None;
            return false;
        }

        match self.stop_tx.take() {
            Some(stop_tx) => stop_tx.send(()).is_ok(),
            None => false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Wait for the fight to end and collect its report.
    pub async fn join(self) -> Result<EncounterReport> {
        self.worker.await.map_err(RuntimeError::WorkerJoin)
    }
}
