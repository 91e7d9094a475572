//! Notifications emitted while a session advances.

use crate::combat::AttackResult;
use crate::stats::CombatantSnapshot;

use super::Side;

/// Everything a host can learn from one `advance` call, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// A side's cooldown elapsed and it swung, hit or miss.
    AttackAttempted { attacker: Side, defender: Side },

    /// Outcome of the swing announced by the preceding `AttackAttempted`.
    HitResolved {
        attacker: Side,
        defender: Side,
        result: AttackResult,
        /// Defender's hitpoints right after this blow.
        defender_hitpoints: u32,
    },

    /// Fired exactly once, when a side's hitpoints reach zero.
    CombatEnded { winner: Side, loser: Side },
}

impl CombatEvent {
    /// The side that acted (or won, for `CombatEnded`).
    pub const fn actor(&self) -> Side {
        match self {
            Self::AttackAttempted { attacker, .. } | Self::HitResolved { attacker, .. } => {
                *attacker
            }
            Self::CombatEnded { winner, .. } => *winner,
        }
    }
}

/// Typed listener invoked synchronously during `advance`.
///
/// Each slot receives the live snapshots, already updated with the damage of the
/// attack being reported. All slots default to no-ops.
pub trait CombatObserver: Send {
    /// A side swung, hit or miss.
    fn on_attack(&mut self, _attacker: &CombatantSnapshot, _defender: &CombatantSnapshot) {}

    /// Outcome of the swing; inspect `result.hit` to learn whether damage landed.
    fn on_hit(
        &mut self,
        _attacker: &CombatantSnapshot,
        _defender: &CombatantSnapshot,
        _result: &AttackResult,
    ) {
    }

    /// The fight is over.
    fn on_combat_end(&mut self, _winner: &CombatantSnapshot, _loser: &CombatantSnapshot) {}
}
