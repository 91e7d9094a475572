/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Damage dealt by an insta-kill attacker. Raised to the target's current
    /// hitpoints when lower, so the blow is always lethal.
    pub insta_kill_damage: u32,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INSTA_KILL_DAMAGE: u32 = 999;

    pub const fn new() -> Self {
        Self {
            insta_kill_damage: Self::DEFAULT_INSTA_KILL_DAMAGE,
        }
    }

    pub const fn with_insta_kill_damage(insta_kill_damage: u32) -> Self {
        Self { insta_kill_damage }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
