//! Hit chance and accuracy calculations.

use crate::env::{UniformSource, draw_unit};

/// Attack roll: `attack_level + attack_bonus`.
///
/// Not clamped; a negative bonus can push the roll to zero or below.
pub fn attack_roll(attack_level: u32, attack_bonus: i32) -> i64 {
    i64::from(attack_level) + i64::from(attack_bonus)
}

/// Defense roll: `defense_level + defense_bonus`. Same contract as [`attack_roll`].
pub fn defense_roll(defense_level: u32, defense_bonus: i32) -> i64 {
    i64::from(defense_level) + i64::from(defense_bonus)
}

/// Probability that an attack lands.
///
/// # Formula
///
/// ```text
/// if attack_roll > defense_roll:
///     chance = 1 - (defense_roll + 2) / (2 * (attack_roll + 1))
/// else:
///     chance = attack_roll / (2 * (defense_roll + 1))
/// ```
///
/// Both rolls are floored at zero first. On non-negative rolls the upper branch
/// stays in `[0.5, 1)` and the lower branch in `[0, 0.5)`, so a side that is
/// behind never beats one that is ahead. A roll at or below zero is a certain
/// miss against any defense roll at or below zero.
pub fn hit_chance(attack_roll: i64, defense_roll: i64) -> f64 {
    let attack_roll = attack_roll.max(0);
    let defense_roll = defense_roll.max(0);
    let attack = attack_roll as f64;
    let defense = defense_roll as f64;

    if attack_roll > defense_roll {
        1.0 - (defense + 2.0) / (2.0 * (attack + 1.0))
    } else {
        attack / (2.0 * (defense + 1.0))
    }
}

/// Draws one value and returns `true` if it falls under the hit chance.
pub fn roll_accuracy(
    attack_roll: i64,
    defense_roll: i64,
    rng: &mut (impl UniformSource + ?Sized),
) -> bool {
    draw_unit(rng) < hit_chance(attack_roll, defense_roll)
}
