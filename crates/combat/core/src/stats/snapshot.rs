//! CombatantSnapshot - the combat-relevant view of one actor.

use super::bonus::CombatBonuses;
use crate::error::SnapshotError;

/// Combat attributes of one actor, lent to a session for the length of a fight.
///
/// The session mutates `hitpoints` in place and nothing else. An `attack_speed_ms`
/// of zero marks a passive actor that never swings back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSnapshot {
    pub attack_level: u32,
    pub strength_level: u32,
    pub defense_level: u32,

    /// Current health, never negative.
    pub hitpoints: u32,

    /// Upper clamp for healing. At rest `hitpoints <= max_hitpoints`.
    pub max_hitpoints: u32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: CombatBonuses,

    /// Milliseconds between consecutive attacks; `0` means the actor never attacks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_speed_ms: u32,

    /// Every attack hits for a lethal amount (debug weapons).
    #[cfg_attr(feature = "serde", serde(default))]
    pub insta_kill: bool,
}

impl CombatantSnapshot {
    /// Creates a snapshot at full health with no bonuses and no attack cadence.
    pub const fn new(
        attack_level: u32,
        strength_level: u32,
        defense_level: u32,
        max_hitpoints: u32,
    ) -> Self {
        Self {
            attack_level,
            strength_level,
            defense_level,
            hitpoints: max_hitpoints,
            max_hitpoints,
            bonuses: CombatBonuses::NONE,
            attack_speed_ms: 0,
            insta_kill: false,
        }
    }

    #[must_use]
    pub const fn with_hitpoints(mut self, hitpoints: u32) -> Self {
        self.hitpoints = hitpoints;
        self
    }

    #[must_use]
    pub const fn with_bonuses(mut self, bonuses: CombatBonuses) -> Self {
        self.bonuses = bonuses;
        self
    }

    #[must_use]
    pub const fn with_attack_speed(mut self, attack_speed_ms: u32) -> Self {
        self.attack_speed_ms = attack_speed_ms;
        self
    }

    #[must_use]
    pub const fn with_insta_kill(mut self, insta_kill: bool) -> Self {
        self.insta_kill = insta_kill;
        self
    }

    /// Returns true if this actor ever takes a swing.
    pub const fn can_attack(&self) -> bool {
        self.attack_speed_ms > 0
    }

    pub const fn is_defeated(&self) -> bool {
        self.hitpoints == 0
    }

    /// Checks the resting invariants a host should guarantee before a fight.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.max_hitpoints == 0 {
            return Err(SnapshotError::ZeroMaxHitpoints);
        }
        if self.hitpoints > self.max_hitpoints {
            return Err(SnapshotError::HitpointsExceedMax {
                hitpoints: self.hitpoints,
                max_hitpoints: self.max_hitpoints,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_is_passive_and_at_full_health() {
        let snapshot = CombatantSnapshot::new(1, 1, 1, 3);

        assert_eq!(snapshot.hitpoints, 3);
        assert!(!snapshot.can_attack());
        assert!(!snapshot.is_defeated());
        assert_eq!(snapshot.bonuses, CombatBonuses::NONE);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inconsistent_hitpoints() {
        let zero_max = CombatantSnapshot::new(1, 1, 1, 0);
        assert_eq!(zero_max.validate(), Err(SnapshotError::ZeroMaxHitpoints));

        let overfull = CombatantSnapshot::new(1, 1, 1, 10).with_hitpoints(11);
        assert_eq!(
            overfull.validate(),
            Err(SnapshotError::HitpointsExceedMax {
                hitpoints: 11,
                max_hitpoints: 10
            })
        );
    }
}
