//! End-to-end encounters driven by the paused tokio clock.

use std::time::Duration;

use combat_content::{ContentBundle, ContentError, PlayerStats};
use combat_core::{CombatEvent, ScriptedSource, Side};
use combat_runtime::{
    Encounter, EncounterEvent, EncounterOutcome, RuntimeConfig, RuntimeError, settle,
};
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

fn encounter(config: RuntimeConfig) -> Encounter {
    Encounter::new(config, ContentBundle::builtin())
}

fn armed(weapon: &str) -> PlayerStats {
    PlayerStats {
        weapon: Some(weapon.into()),
        ..PlayerStats::new()
    }
}

fn drain(rx: &mut tokio::sync::broadcast::Receiver<EncounterEvent>) -> Vec<EncounterEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            Err(TryRecvError::Lagged(skipped)) => panic!("subscriber lagged by {skipped}"),
        }
    }
    events
}

#[tokio::test(start_paused = true)]
async fn debug_dagger_kills_on_first_swing() {
    let runtime = encounter(RuntimeConfig::default().with_seed(1));
    let mut handle = runtime.start(&armed("debug_dagger"), "chicken").unwrap();
    let mut rx = handle.subscribe();

    let report = handle.join().await.unwrap();

    assert_eq!(report.outcome, EncounterOutcome::Victory);
    assert_eq!(report.attacks, 1);
    assert_eq!(report.npc_hitpoints, 0);
    assert_eq!(report.player_hitpoints, 10);
    assert_eq!(report.elapsed_ms, 0);

    let events: Vec<_> = drain(&mut rx).into_iter().map(|e| e.event).collect();
    assert_eq!(events.len(), 3);
    assert!(matches!(
        events[0],
        CombatEvent::AttackAttempted {
            attacker: Side::Attacker,
            defender: Side::Defender
        }
    ));
    assert!(matches!(
        events[1],
        CombatEvent::HitResolved { result, .. } if result.hit && result.damage >= 3
    ));
    assert_eq!(
        events[2],
        CombatEvent::CombatEnded {
            winner: Side::Attacker,
            loser: Side::Defender
        }
    );
}

#[tokio::test(start_paused = true)]
async fn chicken_can_defeat_a_wounded_player() {
    let runtime = encounter(RuntimeConfig::default());
    let mut player = PlayerStats {
        hitpoints_current: 1,
        ..PlayerStats::new()
    };

    // Player misses at 0 ms and 2400 ms; the chicken hits for 1 at 3000 ms.
    let rng = ScriptedSource::new(vec![0.99, 0.99, 0.0, 0.99]);
    let mut handle = runtime.start_with_source(&player, "chicken", rng).unwrap();
    let mut rx = handle.subscribe();

    let report = handle.join().await.unwrap();

    assert_eq!(report.outcome, EncounterOutcome::Defeat);
    assert_eq!(report.attacks, 3);
    assert_eq!(report.player_hitpoints, 0);
    assert_eq!(report.npc_hitpoints, 3);
    assert_eq!(report.elapsed_ms, 3000);

    let events = drain(&mut rx);
    let last = events.last().unwrap();
    assert_eq!(last.player_hitpoints, 0);
    assert_eq!(
        last.event,
        CombatEvent::CombatEnded {
            winner: Side::Defender,
            loser: Side::Attacker
        }
    );

    let template = runtime.content().npcs.get("chicken").unwrap().clone();
    let settlement = settle(&report, &mut player, &template);
    assert_eq!(settlement.experience_gained, 0);
    assert_eq!(player.hitpoints_current, 5);
}

#[tokio::test(start_paused = true)]
async fn stop_ends_the_fight_without_a_winner() {
    let runtime = encounter(RuntimeConfig::default());
    let rng = ScriptedSource::constant(0.99);
    let mut handle = runtime
        .start_with_source(&PlayerStats::new(), "chicken", rng)
        .unwrap();
    let mut rx = handle.subscribe();

    tokio::time::sleep(Duration::from_millis(5_000)).await;
    assert!(handle.stop());
    assert!(!handle.stop());

    let report = handle.join().await.unwrap();

    assert_eq!(report.outcome, EncounterOutcome::Stopped);
    assert_eq!(report.player_hitpoints, 10);
    assert_eq!(report.npc_hitpoints, 3);

    let events = drain(&mut rx);
    assert!(!events.is_empty());
    assert!(
        events
            .iter()
            .all(|e| !matches!(e.event, CombatEvent::CombatEnded { .. }))
    );
}

#[tokio::test(start_paused = true)]
async fn simultaneous_swings_are_stamped_in_order() {
    let runtime = encounter(RuntimeConfig::default());

    // Dagger and chicken both swing every 3000 ms. The player misses at 0 ms and
    // 3000 ms; the chicken's counter at 3000 ms hits for 1.
    let rng = ScriptedSource::new(vec![0.99, 0.99, 0.0, 0.99]);
    let mut handle = runtime
        .start_with_source(&armed("dagger"), "chicken", rng)
        .unwrap();
    let mut rx = handle.subscribe();

    tokio::time::sleep(Duration::from_millis(3_050)).await;
    assert!(handle.stop());
    let report = handle.join().await.unwrap();

    assert_eq!(report.outcome, EncounterOutcome::Stopped);
    assert_eq!(report.elapsed_ms, 3_050);
    assert_eq!(report.player_hitpoints, 9);

    let resolved: Vec<_> = drain(&mut rx)
        .into_iter()
        .filter(|e| e.elapsed_ms == 3_000)
        .filter_map(|e| match e.event {
            CombatEvent::HitResolved { attacker, .. } => {
                Some((attacker, e.player_hitpoints, e.npc_hitpoints))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        resolved,
        vec![(Side::Attacker, 10, 3), (Side::Defender, 9, 3)]
    );
}

#[tokio::test(start_paused = true)]
async fn late_subscribers_only_see_new_events() {
    let runtime = encounter(RuntimeConfig::default());
    let rng = ScriptedSource::constant(0.99);
    let mut handle = runtime
        .start_with_source(&PlayerStats::new(), "chicken", rng)
        .unwrap();

    let mut first = handle.subscribe();
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    let mut late = handle.subscribe();
    tokio::time::sleep(Duration::from_millis(2_000)).await;
    handle.stop();
    handle.join().await.unwrap();

    // First swing at 0 ms reaches only the first subscriber.
    let early = drain(&mut first);
    let later = drain(&mut late);
    assert!(early.iter().any(|e| e.elapsed_ms == 0));
    assert!(later.iter().all(|e| e.elapsed_ms >= 1_000));
    assert!(later.len() < early.len());
}

#[tokio::test(start_paused = true)]
async fn receivers_close_when_the_fight_ends() {
    let runtime = encounter(RuntimeConfig::default());
    let mut handle = runtime
        .start_with_source(&armed("debug_dagger"), "chicken", ScriptedSource::constant(0.5))
        .unwrap();
    let mut rx = handle.subscribe();

    let mut seen = 0;
    while rx.recv().await.is_ok() {
        seen += 1;
    }
    assert_eq!(seen, 3);

    let mut late = handle.subscribe();
    assert_eq!(late.recv().await, Err(RecvError::Closed));
    assert!(!handle.stop());

    let report = handle.join().await.unwrap();
    assert_eq!(report.outcome, EncounterOutcome::Victory);
}

#[tokio::test(start_paused = true)]
async fn unknown_npc_is_rejected() {
    let runtime = encounter(RuntimeConfig::default());

    let result = runtime.start(&PlayerStats::new(), "dragon");

    assert!(matches!(
        result,
        Err(RuntimeError::Content(ContentError::UnknownNpc(ref id))) if id == "dragon"
    ));
}

#[tokio::test(start_paused = true)]
async fn seeded_fights_replay_identically() {
    let runtime = encounter(RuntimeConfig::default().with_seed(42));

    let first = runtime.start(&armed("dagger"), "chicken").unwrap();
    let first = first.join().await.unwrap();

    let second = runtime.start(&armed("dagger"), "chicken").unwrap();
    let second = second.join().await.unwrap();

    assert_eq!(first, second);
    assert_ne!(first.outcome, EncounterOutcome::Stopped);
}
