//! Plain-text rendering of encounter events and reports.

use combat_core::{CombatEvent, Side};
use combat_runtime::{EncounterEvent, EncounterOutcome, EncounterReport, Settlement};

fn name(side: Side, npc_name: &str) -> &str {
    match side {
        Side::Attacker => "You",
        Side::Defender => npc_name,
    }
}

/// One line per event, or `None` for events that only matter to the log.
pub fn event_line(event: &EncounterEvent, npc_name: &str) -> Option<String> {
    let stamp = format!("[{:>6.1}s]", event.elapsed_ms as f64 / 1000.0);

    let text = match event.event {
        CombatEvent::AttackAttempted { .. } => return None,
        CombatEvent::HitResolved {
            attacker, result, ..
        } if result.hit => format!(
            "{} hit for {} (you {} / {} {})",
            name(attacker, npc_name),
            result.damage,
            event.player_hitpoints,
            npc_name,
            event.npc_hitpoints
        ),
        CombatEvent::HitResolved { attacker, .. } => {
            format!("{} missed", name(attacker, npc_name))
        }
        CombatEvent::CombatEnded { winner, loser } => format!(
            "{} defeated {}",
            name(winner, npc_name),
            match loser {
                Side::Attacker => "you",
                Side::Defender => npc_name,
            }
        ),
    };

    Some(format!("{stamp} {text}"))
}

pub fn summary(report: &EncounterReport, settlement: &Settlement) -> String {
    let verdict = match report.outcome {
        EncounterOutcome::Victory => "Victory",
        EncounterOutcome::Defeat => "Defeat",
        EncounterOutcome::Stopped => "Fled",
    };

    format!(
        "{verdict} against {} after {} attacks in {:.1}s: +{} xp, {} hp left",
        report.npc_id,
        report.attacks,
        report.elapsed_ms as f64 / 1000.0,
        settlement.experience_gained,
        settlement.hitpoints
    )
}
