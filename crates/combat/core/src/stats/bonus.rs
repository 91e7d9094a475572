//! Flat gear and innate bonuses.

use core::ops::{Add, AddAssign};

/// Flat additive bonuses applied on top of skill levels.
///
/// Bonuses may be negative; rolls built from them are not clamped. Missing
/// bonuses default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatBonuses {
    pub attack: i32,
    pub strength: i32,
    pub defense: i32,
}

impl CombatBonuses {
    pub const NONE: Self = Self::new(0, 0, 0);

    pub const fn new(attack: i32, strength: i32, defense: i32) -> Self {
        Self {
            attack,
            strength,
            defense,
        }
    }
}

impl Add for CombatBonuses {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            attack: self.attack.saturating_add(rhs.attack),
            strength: self.strength.saturating_add(rhs.strength),
            defense: self.defense.saturating_add(rhs.defense),
        }
    }
}

impl AddAssign for CombatBonuses {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
