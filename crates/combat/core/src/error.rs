//! Error types for combat-core.
//!
//! Attack resolution and session advancement never fail: every input is a trusted
//! number supplied by the host. The only fallible operation is the optional
//! consistency check a host can run on a snapshot before starting a fight.

/// Inconsistent combatant snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotError {
    #[error("max hitpoints must be at least 1")]
    ZeroMaxHitpoints,

    #[error("hitpoints {hitpoints} exceed max hitpoints {max_hitpoints}")]
    HitpointsExceedMax { hitpoints: u32, max_hitpoints: u32 },
}
