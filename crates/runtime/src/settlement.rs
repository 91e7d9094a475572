//! Post-fight bookkeeping applied to the player's persisted stats.

use combat_content::{NpcTemplate, PlayerStats};

use crate::events::{EncounterOutcome, EncounterReport};

/// What a finished encounter changed on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub experience_gained: u64,
    /// Player hitpoints after settlement.
    pub hitpoints: u32,
}

/// Applies the outcome of `report` to `stats`.
///
/// - Victory: award the template's experience, keep remaining hitpoints.
/// - Defeat: respawn at half the hitpoints level (at least 1), no experience.
/// - Stopped: keep remaining hitpoints, no experience.
pub fn settle(report: &EncounterReport, stats: &mut PlayerStats, npc: &NpcTemplate) -> Settlement {
    let (experience_gained, hitpoints) = match report.outcome {
        EncounterOutcome::Victory => (npc.experience, report.player_hitpoints),
        EncounterOutcome::Defeat => (0, stats.respawn_hitpoints()),
        EncounterOutcome::Stopped => (0, report.player_hitpoints),
    };

    stats.experience = stats.experience.saturating_add(experience_gained);
    stats.hitpoints_current = hitpoints.min(stats.hitpoints_level);

    tracing::debug!(
        outcome = ?report.outcome,
        experience_gained,
        hitpoints = stats.hitpoints_current,
        "Settled encounter"
    );

    Settlement {
        experience_gained,
        hitpoints: stats.hitpoints_current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outcome: EncounterOutcome, player_hitpoints: u32) -> EncounterReport {
        EncounterReport {
            npc_id: "chicken".into(),
            outcome,
            attacks: 4,
            player_hitpoints,
            npc_hitpoints: 0,
            elapsed_ms: 9000,
        }
    }

    #[test]
    fn victory_awards_experience_and_keeps_damage() {
        let mut stats = PlayerStats::new();

        let settlement = settle(
            &report(EncounterOutcome::Victory, 8),
            &mut stats,
            &NpcTemplate::chicken(),
        );

        assert_eq!(settlement, Settlement { experience_gained: 5, hitpoints: 8 });
        assert_eq!(stats.experience, 5);
        assert_eq!(stats.hitpoints_current, 8);
    }

    #[test]
    fn defeat_respawns_at_half_health() {
        let mut stats = PlayerStats::new();

        let settlement = settle(
            &report(EncounterOutcome::Defeat, 0),
            &mut stats,
            &NpcTemplate::chicken(),
        );

        assert_eq!(settlement.experience_gained, 0);
        assert_eq!(stats.hitpoints_current, 5);
    }

    #[test]
    fn stopped_fight_awards_nothing() {
        let mut stats = PlayerStats::new();

        settle(&report(EncounterOutcome::Stopped, 6), &mut stats, &NpcTemplate::chicken());

        assert_eq!(stats.experience, 0);
        assert_eq!(stats.hitpoints_current, 6);
    }
}
