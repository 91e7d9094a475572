//! Builds combat snapshots from persisted stats and static tables.

use combat_core::CombatantSnapshot;

use crate::npcs::NpcTemplate;
use crate::player::PlayerStats;
use crate::weapons::WeaponDefinition;

/// Snapshot of the player wielding `weapon`.
///
/// Current health is clamped to the hitpoints level so the snapshot always
/// satisfies its resting invariant.
pub fn player_snapshot(stats: &PlayerStats, weapon: &WeaponDefinition) -> CombatantSnapshot {
    let max_hitpoints = stats.hitpoints_level.max(1);

    CombatantSnapshot::new(stats.attack, stats.strength, stats.defense, max_hitpoints)
        .with_hitpoints(stats.hitpoints_current.min(max_hitpoints))
        .with_bonuses(weapon.bonuses())
        .with_attack_speed(weapon.attack_speed_ms)
        .with_insta_kill(weapon.insta_kill)
}

/// Fresh, full-health snapshot of an NPC.
pub fn npc_snapshot(template: &NpcTemplate) -> CombatantSnapshot {
    let max_hitpoints = template.hitpoints.max(1);

    CombatantSnapshot::new(template.attack, template.strength, template.defense, max_hitpoints)
        .with_bonuses(template.bonuses)
        .with_attack_speed(template.attack_speed_ms)
}
