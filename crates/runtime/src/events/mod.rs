//! Events published while an encounter runs.

pub mod types;

pub use types::{EncounterEvent, EncounterOutcome, EncounterReport};
