//! Attack result type and single-attack resolution.

use crate::config::CombatConfig;
use crate::env::UniformSource;
use crate::stats::CombatantSnapshot;

use super::damage::{max_hit, roll_damage};
use super::hit::{attack_roll, defense_roll, roll_accuracy};

/// Outcome of one attack attempt.
///
/// A miss always carries zero damage. A hit may also carry zero damage when the
/// damage roll comes up empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub hit: bool,
    pub damage: u32,
}

impl AttackResult {
    pub const MISS: Self = Self {
        hit: false,
        damage: 0,
    };

    pub const fn hit(damage: u32) -> Self {
        Self { hit: true, damage }
    }
}

/// Resolve one attack from `attacker` against `defender`.
///
/// 1. An insta-kill attacker hits for a lethal amount without consuming draws.
/// 2. One accuracy draw against `attack_level + attack bonus` vs
///    `defense_level + defense bonus`; a miss returns immediately.
/// 3. One damage draw in `[0, max_hit]` from `strength_level + strength bonus`.
///
/// Neither snapshot is modified.
pub fn perform_attack(
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    config: &CombatConfig,
    rng: &mut (impl UniformSource + ?Sized),
) -> AttackResult {
    if attacker.insta_kill {
        return AttackResult::hit(config.insta_kill_damage.max(defender.hitpoints));
    }

    let attack = attack_roll(attacker.attack_level, attacker.bonuses.attack);
    let defense = defense_roll(defender.defense_level, defender.bonuses.defense);

    if !roll_accuracy(attack, defense, rng) {
        return AttackResult::MISS;
    }

    let ceiling = max_hit(attacker.strength_level, attacker.bonuses.strength);
    AttackResult::hit(roll_damage(ceiling, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgSource, ScriptedSource};
    use crate::stats::CombatBonuses;

    fn fighter() -> CombatantSnapshot {
        CombatantSnapshot::new(10, 16, 1, 10).with_attack_speed(3000)
    }

    fn chicken() -> CombatantSnapshot {
        CombatantSnapshot::new(1, 1, 1, 3).with_attack_speed(3000)
    }

    #[test]
    fn insta_kill_ignores_defense() {
        let attacker = CombatantSnapshot::new(1, 1, 1, 10).with_insta_kill(true);
        let fortress = CombatantSnapshot::new(1, 1, 5_000, 50)
            .with_bonuses(CombatBonuses::new(0, 0, i32::MAX));
        let mut rng = ScriptedSource::constant(0.999);

        let result = perform_attack(&attacker, &fortress, &CombatConfig::default(), &mut rng);

        assert_eq!(result, AttackResult::hit(CombatConfig::DEFAULT_INSTA_KILL_DAMAGE));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn insta_kill_exceeds_oversized_pools() {
        let attacker = fighter().with_insta_kill(true);
        let titan = CombatantSnapshot::new(1, 1, 1, 5_000);

        let result = perform_attack(&attacker, &titan, &CombatConfig::default(), &mut PcgSource::new(1));

        assert!(result.hit);
        assert!(result.damage >= titan.hitpoints);
    }

    #[test]
    fn miss_skips_damage_roll() {
        // chance(10, 1) = 1 - 3 / 22 ~ 0.86
        let mut rng = ScriptedSource::new(vec![0.95, 0.999]);

        let result = perform_attack(&fighter(), &chicken(), &CombatConfig::default(), &mut rng);

        assert_eq!(result, AttackResult::MISS);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn hit_rolls_damage_from_strength() {
        // max_hit(16, 0) = 2; 0.999 * 3 floors to 2
        let mut rng = ScriptedSource::new(vec![0.0, 0.999]);

        let result = perform_attack(&fighter(), &chicken(), &CombatConfig::default(), &mut rng);

        assert_eq!(result, AttackResult::hit(2));
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn hit_can_roll_zero_damage() {
        let mut rng = ScriptedSource::new(vec![0.0, 0.0]);

        let result = perform_attack(&fighter(), &chicken(), &CombatConfig::default(), &mut rng);

        assert_eq!(result, AttackResult::hit(0));
    }

    #[test]
    fn misses_never_leak_previous_damage() {
        let config = CombatConfig::default();
        // hit for 2, then miss
        let mut rng = ScriptedSource::new(vec![0.0, 0.999, 0.99]);

        let first = perform_attack(&fighter(), &chicken(), &config, &mut rng);
        let second = perform_attack(&fighter(), &chicken(), &config, &mut rng);

        assert_eq!(first.damage, 2);
        assert_eq!(second, AttackResult::MISS);
    }

    #[test]
    fn bonuses_feed_rolls() {
        let config = CombatConfig::default();
        // Without bonuses: chance(1, 1) = 1/4. With +7 attack: chance(8, 1) = 1 - 3/18.
        let weak = CombatantSnapshot::new(1, 1, 1, 10);
        let armed = weak.clone().with_bonuses(CombatBonuses::new(7, 4, 0));
        let draw = 0.5;

        let unarmed = perform_attack(&weak, &chicken(), &config, &mut ScriptedSource::new(vec![draw, 0.0]));
        let dagger = perform_attack(&armed, &chicken(), &config, &mut ScriptedSource::new(vec![draw, 0.0]));

        assert!(!unarmed.hit);
        assert!(dagger.hit);
    }
}
