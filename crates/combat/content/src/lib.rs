//! Data-driven content definitions and loaders.
//!
//! This crate houses the static tables a host needs to start a fight:
//! - Weapon catalog (attack speed and bonuses, data-driven via RON)
//! - NPC templates (base stats, data-driven via RON)
//! - Combat configuration (data-driven via TOML)
//! - The player's persisted stat sheet
//!
//! [`snapshots`] turns those records into the
//! [`CombatantSnapshot`](combat_core::CombatantSnapshot)s the combat core reads.
//! Content never appears inside a running session.

pub mod bundle;
pub mod error;
pub mod npcs;
pub mod player;
pub mod snapshots;
pub mod weapons;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bundle::ContentBundle;
pub use error::ContentError;
pub use npcs::{NpcCatalog, NpcTemplate};
pub use player::PlayerStats;
pub use snapshots::{npc_snapshot, player_snapshot};
pub use weapons::{WeaponCatalog, WeaponDefinition};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, NpcLoader, WeaponLoader};
