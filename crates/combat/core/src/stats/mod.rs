//! Combatant stats read by the combat math.
//!
//! A [`CombatantSnapshot`] is the subset of an actor's persisted stats that the
//! resolver needs: three skill levels, hitpoints, gear/innate bonuses and an
//! attack cadence. The host builds it and lends it to a session, which only ever
//! writes the `hitpoints` field.

pub mod bonus;
pub mod snapshot;

pub use bonus::CombatBonuses;
pub use snapshot::CombatantSnapshot;
