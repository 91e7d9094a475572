//! Runtime host for the combat core.
//!
//! The combat core never owns a clock. This crate supplies one: an encounter
//! worker ticks a [`combat_core::CombatSession`] from the tokio timer, publishes
//! every notification on a broadcast channel, and honours external stop
//! requests. Consumers start fights through [`Encounter`] and interact with them
//! through [`EncounterHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and its configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] defines what subscribers receive
//! - [`settlement`] applies fight results to the player's persisted stats
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod settlement;

mod workers;

pub use api::{EncounterHandle, Result, RuntimeError};
pub use events::{EncounterEvent, EncounterOutcome, EncounterReport};
pub use runtime::{Encounter, RuntimeConfig};
pub use settlement::{Settlement, settle};
