//! Damage calculation and application.

use crate::env::{UniformSource, draw_unit};

/// Effective strength per point of max hit.
const STRENGTH_PER_MAX_HIT: i64 = 8;

/// Upper bound of a damage roll for one successful attack.
///
/// # Formula
///
/// ```text
/// max_hit = max(1, floor((strength_level + strength_bonus) / 8))
/// ```
///
/// The ceiling is never below 1, so a landed hit can always hurt. The roll itself
/// may still come up 0.
pub fn max_hit(strength_level: u32, strength_bonus: i32) -> u32 {
    let effective = i64::from(strength_level) + i64::from(strength_bonus);
    let ceiling = effective.div_euclid(STRENGTH_PER_MAX_HIT).max(1);
    u32::try_from(ceiling).unwrap_or(u32::MAX)
}

/// Uniform integer damage in `[0, max_hit]`.
///
/// Computed as `floor(draw * (max_hit + 1))`, one draw per call.
pub fn roll_damage(max_hit: u32, rng: &mut (impl UniformSource + ?Sized)) -> u32 {
    let buckets = f64::from(max_hit) + 1.0;
    let damage = (draw_unit(rng) * buckets).floor() as u32;
    damage.min(max_hit)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
