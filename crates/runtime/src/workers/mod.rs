//! Background tasks owned by the runtime.

mod encounter;

pub(crate) use encounter::EncounterWorker;
