//! Encounter worker that owns both combatants for the length of a fight.
//!
//! Ticks a [`CombatSession`] from the tokio clock, republishes its notifications
//! on the broadcast channel, and honours external stop requests.

use std::time::Duration;

use tokio::sync::{broadcast, oneshot};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use combat_core::{
    CombatConfig, CombatEvent, CombatSession, CombatantSnapshot, SessionEnd, Side, UniformSource,
};

use crate::events::{EncounterEvent, EncounterReport};

/// Background task driving one fight between the player and an NPC.
pub(crate) struct EncounterWorker<R> {
    pub npc_id: String,
    pub player: CombatantSnapshot,
    pub npc: CombatantSnapshot,
    pub attack_speed_ms: u32,
    pub combat_config: CombatConfig,
    pub rng: R,
    pub tick: Duration,
    pub event_tx: broadcast::Sender<EncounterEvent>,
    pub stop_rx: oneshot::Receiver<()>,
}

impl<R: UniformSource + Send> EncounterWorker<R> {
    /// Main worker loop. Returns once a side is defeated or a stop is requested.
    pub async fn run(self) -> EncounterReport {
        let EncounterWorker {
            npc_id,
            mut player,
            mut npc,
            attack_speed_ms,
            combat_config,
            rng,
            tick,
            event_tx,
            mut stop_rx,
        } = self;

        let mut session = CombatSession::new(&mut player, &mut npc, attack_speed_ms, rng)
            .with_config(combat_config);

        let started = Instant::now();
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut stop_armed = true;
        let mut attacks = 0u32;
        let mut elapsed_ms = 0u64;

        info!(npc = %npc_id, attack_speed_ms, "Encounter started");

        loop {
            tokio::select! {
                biased;

                request = &mut stop_rx, if stop_armed => {
                    match request {
                        Ok(()) => {
                            elapsed_ms = started.elapsed().as_millis() as u64;
                            info!(npc = %npc_id, elapsed_ms, "Encounter stopped by host");
                            session.stop();
                            break;
                        }
                        // Handle dropped: keep fighting until a side falls.
                        Err(_) => stop_armed = false,
                    }
                }
                _ = interval.tick() => {
                    elapsed_ms = started.elapsed().as_millis() as u64;

                    // Both sides may swing in one tick; stamp each event with the
                    // hitpoints as they stood when it was emitted.
                    let mut player_hitpoints = session.attacker().hitpoints;
                    let mut npc_hitpoints = session.defender().hitpoints;
                    let active = session.advance(elapsed_ms);

                    for event in session.drain_events() {
                        match event {
                            CombatEvent::AttackAttempted { .. } => attacks += 1,
                            CombatEvent::HitResolved {
                                defender: Side::Attacker,
                                defender_hitpoints,
                                ..
                            } => player_hitpoints = defender_hitpoints,
                            CombatEvent::HitResolved {
                                defender: Side::Defender,
                                defender_hitpoints,
                                ..
                            } => npc_hitpoints = defender_hitpoints,
                            CombatEvent::CombatEnded { .. } => {}
                        }

                        let stamped = EncounterEvent {
                            elapsed_ms,
                            event,
                            player_hitpoints,
                            npc_hitpoints,
                        };
                        debug!(
                            elapsed_ms,
                            player_hp = stamped.player_hitpoints,
                            npc_hp = stamped.npc_hitpoints,
                            "{:?}",
                            event
                        );

                        if event_tx.send(stamped).is_err() {
                            // No subscribers - this is normal, not an error
                            tracing::trace!("No subscribers for encounter events");
                        }
                    }

                    if !active {
                        break;
                    }
                }
            }
        }

        let end = session.end().unwrap_or(SessionEnd::Stopped);
        drop(session);

        let report = EncounterReport {
            npc_id,
            outcome: end.into(),
            attacks,
            player_hitpoints: player.hitpoints,
            npc_hitpoints: npc.hitpoints,
            elapsed_ms,
        };

        info!(
            npc = %report.npc_id,
            outcome = ?report.outcome,
            attacks = report.attacks,
            player_hp = report.player_hitpoints,
            npc_hp = report.npc_hitpoints,
            "Encounter finished"
        );

        report
    }
}
