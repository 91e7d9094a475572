//! High-level encounter orchestrator.
//!
//! [`Encounter`] turns persisted player stats and content tables into a pair of
//! snapshots, spawns the worker that drives them, and hands back an
//! [`EncounterHandle`].

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::{broadcast, oneshot};

use combat_content::weapons::UNARMED_ID;
use combat_content::{ContentBundle, PlayerStats, npc_snapshot, player_snapshot};
use combat_core::{PcgSource, Side, SystemSource, UniformSource};

use crate::api::{EncounterHandle, Result, RuntimeError};
use crate::workers::EncounterWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// How often the worker advances the session.
    pub tick: Duration,
    /// Seed for a reproducible fight; `None` draws from system entropy.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    /// Directory holding `config.toml`, `weapons.ron` and `npcs.ron`.
    pub content_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_MS: u64 = 100;
    pub const DEFAULT_EVENT_BUFFER: usize = 64;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMBAT_TICK_MS` - Milliseconds between session updates (default: 100)
    /// - `COMBAT_SEED` - Seed for reproducible fights (default: system entropy)
    /// - `COMBAT_EVENT_CAPACITY` - Broadcast buffer per subscriber (default: 64)
    /// - `COMBAT_CONTENT_DIR` - Data directory (default: built-in tables)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(tick_ms) = read_env::<u64>("COMBAT_TICK_MS") {
            config.tick = Duration::from_millis(tick_ms.max(1));
        }

        config.seed = read_env::<u64>("COMBAT_SEED");

        if let Some(capacity) = read_env::<usize>("COMBAT_EVENT_CAPACITY") {
            config.event_buffer_size = capacity.max(1);
        }

        config.content_dir = env::var("COMBAT_CONTENT_DIR").ok().map(PathBuf::from);

        config
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Random source for a new fight: seeded PCG when a seed is set.
    pub fn random_source(&self) -> Box<dyn UniformSource + Send> {
        match self.seed {
            Some(seed) => Box::new(PcgSource::new(seed)),
            None => Box::new(SystemSource::from_entropy()),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(Self::DEFAULT_TICK_MS),
            seed: None,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER,
            content_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Starts fights between the player and NPCs from one set of content tables.
#[derive(Debug, Clone)]
pub struct Encounter {
    config: RuntimeConfig,
    content: ContentBundle,
}

impl Encounter {
    pub fn new(config: RuntimeConfig, content: ContentBundle) -> Self {
        Self { config, content }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentBundle {
        &self.content
    }

    /// Start a fight against `npc_id` using the configured random source.
    pub fn start(&self, player: &PlayerStats, npc_id: &str) -> Result<EncounterHandle> {
        self.start_with_source(player, npc_id, self.config.random_source())
    }

    /// Start a fight against `npc_id` with an explicit random source.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_with_source<R>(
        &self,
        player: &PlayerStats,
        npc_id: &str,
        rng: R,
    ) -> Result<EncounterHandle>
    where
        R: UniformSource + Send + 'static,
    {
        let template = self.content.npcs.get(npc_id)?;
        let weapon = self
            .content
            .weapons
            .get(player.weapon.as_deref().unwrap_or(UNARMED_ID));

        let player_combatant = player_snapshot(player, weapon);
        let npc_combatant = npc_snapshot(template);

        player_combatant
            .validate()
            .map_err(|source| RuntimeError::InvalidSnapshot {
                side: Side::Attacker,
                source,
            })?;
        npc_combatant
            .validate()
            .map_err(|source| RuntimeError::InvalidSnapshot {
                side: Side::Defender,
                source,
            })?;

        tracing::debug!(
            npc = %template.id,
            weapon = %weapon.id,
            player_hp = player_combatant.hitpoints,
            npc_hp = npc_combatant.hitpoints,
            "Spawning encounter worker"
        );

        let (stop_tx, stop_rx) = oneshot::channel();
        let (event_tx, first_rx) = broadcast::channel(self.config.event_buffer_size);
        let weak_tx = event_tx.downgrade();

        let worker = EncounterWorker {
            npc_id: template.id.clone(),
            player: player_combatant,
            npc: npc_combatant,
            attack_speed_ms: weapon.attack_speed_ms,
            combat_config: self.content.config.clone(),
            rng,
            tick: self.config.tick,
            event_tx,
            stop_rx,
        };

        let handle = tokio::spawn(worker.run());

        Ok(EncounterHandle::new(stop_tx, weak_tx, first_rx, handle))
    }
}
