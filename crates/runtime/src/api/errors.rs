//! Unified error types surfaced by the runtime API.
//!
//! Wraps content lookups, snapshot validation and worker coordination failures
//! so clients can bubble them up with consistent context.
use thiserror::Error;

use combat_content::ContentError;
use combat_core::SnapshotError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("invalid {side} snapshot")]
    InvalidSnapshot {
        side: combat_core::Side,
        #[source]
        source: SnapshotError,
    },

    #[error("encounter worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
