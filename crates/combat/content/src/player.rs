//! The player's persisted combat stats.

/// Combat skill levels and health carried between fights.
///
/// A new character starts with 10 hitpoints and every other level at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerStats {
    pub attack: u32,
    pub strength: u32,
    pub defense: u32,
    /// Hitpoints level; doubles as the health ceiling.
    pub hitpoints_level: u32,
    /// Health left over from previous fights.
    pub hitpoints_current: u32,
    pub experience: u64,
    /// Equipped weapon id; `None` fights bare-handed.
    pub weapon: Option<String>,
}

impl PlayerStats {
    pub const STARTING_HITPOINTS: u32 = 10;

    pub fn new() -> Self {
        Self {
            attack: 1,
            strength: 1,
            defense: 1,
            hitpoints_level: Self::STARTING_HITPOINTS,
            hitpoints_current: Self::STARTING_HITPOINTS,
            experience: 0,
            weapon: None,
        }
    }

    /// Health restored after a defeat: half the hitpoints level, at least 1.
    pub fn respawn_hitpoints(&self) -> u32 {
        (self.hitpoints_level / 2).max(1)
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}
