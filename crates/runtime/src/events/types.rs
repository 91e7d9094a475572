//! Event and report types.

use combat_core::{CombatEvent, SessionEnd, Side};
use serde::{Deserialize, Serialize};

/// One combat notification, stamped with the encounter clock and both
/// combatants' hitpoints as they stood when it was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterEvent {
    /// Milliseconds since the encounter started.
    pub elapsed_ms: u64,
    pub event: CombatEvent,
    pub player_hitpoints: u32,
    pub npc_hitpoints: u32,
}

/// How an encounter finished, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
    /// Stopped from outside (player fled, scene unloaded).
    Stopped,
}

impl From<SessionEnd> for EncounterOutcome {
    fn from(end: SessionEnd) -> Self {
        match end {
            SessionEnd::Victory {
                winner: Side::Attacker,
            } => Self::Victory,
            SessionEnd::Victory {
                winner: Side::Defender,
            } => Self::Defeat,
            SessionEnd::Stopped => Self::Stopped,
        }
    }
}

/// Summary returned when an encounter worker finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterReport {
    pub npc_id: String,
    pub outcome: EncounterOutcome,
    /// Attack attempts by both sides, hits and misses alike.
    pub attacks: u32,
    pub player_hitpoints: u32,
    pub npc_hitpoints: u32,
    pub elapsed_ms: u64,
}
