//! Deterministic-given-a-seed combat rules shared by every host.
//!
//! `combat-core` defines the accuracy and damage math for a single attack and the
//! attack-timer state machine that pits two combatants against each other. The
//! host owns the clock and the actors: it builds [`CombatantSnapshot`]s, hands
//! them to a [`CombatSession`], and calls [`CombatSession::advance`] once per
//! update tick.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod stats;

pub use combat::{
    AttackResult, apply_damage, attack_roll, defense_roll, hit_chance, max_hit, perform_attack,
    roll_accuracy, roll_damage,
};
pub use config::CombatConfig;
pub use engine::{CombatEvent, CombatObserver, CombatSession, SessionEnd, SessionPhase, Side};
pub use env::{FnSource, PcgSource, ScriptedSource, UniformSource};
#[cfg(feature = "std")]
pub use env::{RandSource, SystemSource};
pub use error::SnapshotError;
pub use stats::{CombatBonuses, CombatantSnapshot};
