use crate::combat::{AttackResult, apply_damage, perform_attack};
use crate::config::CombatConfig;
use crate::env::UniformSource;
use crate::stats::CombatantSnapshot;

use super::events::{CombatEvent, CombatObserver};
use super::{SessionEnd, SessionPhase, Side};

/// One ongoing encounter between two borrowed combatants.
///
/// The session holds exclusive borrows of both snapshots for its whole lifetime,
/// so an actor cannot take part in two sessions at once. Only `hitpoints` is
/// written. Once the session ends no further mutation happens through it; a new
/// encounter needs a new session.
///
/// # Timing
///
/// - The attacker is eligible at the start time (0 by default).
/// - A defender with an attack speed is first eligible one full interval later;
///   a defender without one never attacks.
/// - Every attack reschedules its side to `now + attack_speed`, so coarse polling
///   yields at most one attack per side per [`advance`](Self::advance) call.
/// - Within one call the attacker always resolves before the defender, and the
///   defender's turn is skipped if the attacker's blow ended the fight.
pub struct CombatSession<'a, R> {
    attacker: &'a mut CombatantSnapshot,
    defender: &'a mut CombatantSnapshot,
    attacker_speed_ms: u32,
    attacker_next_attack_at: u64,
    /// `None` for a defender that never attacks.
    defender_next_attack_at: Option<u64>,
    /// Largest timestamp evaluated so far.
    latest_now: Option<u64>,
    phase: SessionPhase,
    end: Option<SessionEnd>,
    config: CombatConfig,
    rng: R,
    events: Vec<CombatEvent>,
    observers: Vec<Box<dyn CombatObserver + 'a>>,
}

impl<'a, R: UniformSource> CombatSession<'a, R> {
    /// Starts a fight at time 0.
    ///
    /// `attacker_speed_ms` is the attacker's weapon-derived cadence; the
    /// snapshot's own `attack_speed_ms` is not consulted for the attacker.
    pub fn new(
        attacker: &'a mut CombatantSnapshot,
        defender: &'a mut CombatantSnapshot,
        attacker_speed_ms: u32,
        rng: R,
    ) -> Self {
        let defender_next_attack_at = defender
            .can_attack()
            .then(|| u64::from(defender.attack_speed_ms));

        Self {
            attacker,
            defender,
            attacker_speed_ms,
            attacker_next_attack_at: 0,
            defender_next_attack_at,
            latest_now: None,
            phase: SessionPhase::Active,
            end: None,
            config: CombatConfig::default(),
            rng,
            events: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Shifts the initial schedule so the fight begins at `start_ms` on the host clock.
    #[must_use]
    pub fn starting_at(mut self, start_ms: u64) -> Self {
        self.attacker_next_attack_at = start_ms;
        self.defender_next_attack_at = self
            .defender
            .can_attack()
            .then(|| start_ms.saturating_add(u64::from(self.defender.attack_speed_ms)));
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a listener invoked synchronously for every notification.
    pub fn observe(&mut self, observer: impl CombatObserver + 'a) -> &mut Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Evaluates both attack timers against `now`.
    ///
    /// Returns whether the session remains active. Calls after the session ended
    /// are no-ops returning `false`. A timestamp earlier than one already seen is
    /// evaluated as that later timestamp.
    pub fn advance(&mut self, now: u64) -> bool {
        if !self.is_active() {
            return false;
        }

        let now = match self.latest_now {
            Some(latest) if now < latest => latest,
            _ => now,
        };
        self.latest_now = Some(now);

        if now >= self.attacker_next_attack_at && self.take_turn(Side::Attacker, now) {
            return false;
        }

        if let Some(next) = self.defender_next_attack_at
            && now >= next
            && self.take_turn(Side::Defender, now)
        {
            return false;
        }

        true
    }

    /// Aborts the fight without a winner and without notifications.
    pub fn stop(&mut self) {
        if self.is_active() {
            self.phase = SessionPhase::Ended;
            self.end = Some(SessionEnd::Stopped);
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// How the session ended, or `None` while still active.
    pub fn end(&self) -> Option<SessionEnd> {
        self.end
    }

    pub fn winner(&self) -> Option<Side> {
        self.end.and_then(|end| end.winner())
    }

    pub fn attacker(&self) -> &CombatantSnapshot {
        self.attacker
    }

    pub fn defender(&self) -> &CombatantSnapshot {
        self.defender
    }

    pub fn combatant(&self, side: Side) -> &CombatantSnapshot {
        match side {
            Side::Attacker => self.attacker,
            Side::Defender => self.defender,
        }
    }

    /// Timestamp at which `side` may attack next; `None` for a passive defender.
    pub fn next_attack_at(&self, side: Side) -> Option<u64> {
        match side {
            Side::Attacker => Some(self.attacker_next_attack_at),
            Side::Defender => self.defender_next_attack_at,
        }
    }

    /// Notifications not yet drained, oldest first.
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Takes all pending notifications.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Resolves one attack by `side` at `now`. Returns true if it ended the fight.
    fn take_turn(&mut self, side: Side, now: u64) -> bool {
        let (striker, target) = match side {
            Side::Attacker => (&*self.attacker, &mut *self.defender),
            Side::Defender => (&*self.defender, &mut *self.attacker),
        };

        let result = perform_attack(striker, target, &self.config, &mut self.rng);
        target.hitpoints = apply_damage(target.hitpoints, result.damage);
        let defender_hitpoints = target.hitpoints;
        let defeated = target.is_defeated();

        match side {
            Side::Attacker => {
                self.attacker_next_attack_at =
                    now.saturating_add(u64::from(self.attacker_speed_ms));
            }
            Side::Defender => {
                self.defender_next_attack_at =
                    Some(now.saturating_add(u64::from(self.defender.attack_speed_ms)));
            }
        }

        let defender = side.opponent();
        self.emit(CombatEvent::AttackAttempted {
            attacker: side,
            defender,
        });
        self.emit(CombatEvent::HitResolved {
            attacker: side,
            defender,
            result,
            defender_hitpoints,
        });

        if defeated {
            self.phase = SessionPhase::Ended;
            self.end = Some(SessionEnd::Victory { winner: side });
            self.emit(CombatEvent::CombatEnded {
                winner: side,
                loser: defender,
            });
        }

        defeated
    }

    fn emit(&mut self, event: CombatEvent) {
        let attacker: &CombatantSnapshot = self.attacker;
        let defender: &CombatantSnapshot = self.defender;
        let seat = |side: Side| match side {
            Side::Attacker => attacker,
            Side::Defender => defender,
        };

        for observer in &mut self.observers {
            match &event {
                CombatEvent::AttackAttempted {
                    attacker,
                    defender,
                } => observer.on_attack(seat(*attacker), seat(*defender)),
                CombatEvent::HitResolved {
                    attacker,
                    defender,
                    result,
                    ..
                } => observer.on_hit(seat(*attacker), seat(*defender), result),
                CombatEvent::CombatEnded { winner, loser } => {
                    observer.on_combat_end(seat(*winner), seat(*loser))
                }
            }
        }

        self.events.push(event);
    }
}

impl<R> core::fmt::Debug for CombatSession<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatSession")
            .field("attacker", &self.attacker)
            .field("defender", &self.defender)
            .field("attacker_speed_ms", &self.attacker_speed_ms)
            .field("attacker_next_attack_at", &self.attacker_next_attack_at)
            .field("defender_next_attack_at", &self.defender_next_attack_at)
            .field("phase", &self.phase)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}
