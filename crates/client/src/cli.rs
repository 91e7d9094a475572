//! Command-line arguments.

use clap::Parser;

use combat_content::PlayerStats;

/// Fight one NPC and print the blow-by-blow.
#[derive(Debug, Parser)]
#[command(name = "skirmish", version, about)]
pub struct Args {
    /// NPC to fight
    #[arg(default_value = "chicken")]
    pub npc: String,

    /// Weapon to wield (unknown ids fall back to bare hands)
    #[arg(short, long)]
    pub weapon: Option<String>,

    /// Seed for a reproducible fight; overrides COMBAT_SEED
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Starting hitpoints, capped at the hitpoints level
    #[arg(long)]
    pub hitpoints: Option<u32>,

    #[arg(long, default_value_t = 1)]
    pub attack: u32,

    #[arg(long, default_value_t = 1)]
    pub strength: u32,

    #[arg(long, default_value_t = 1)]
    pub defense: u32,
}

impl Args {
    /// Player stat sheet described by the arguments.
    pub fn player(&self) -> PlayerStats {
        let base = PlayerStats::new();
        PlayerStats {
            attack: self.attack,
            strength: self.strength,
            defense: self.defense,
            hitpoints_current: self
                .hitpoints
                .map_or(base.hitpoints_current, |hp| hp.min(base.hitpoints_level)),
            weapon: self.weapon.clone(),
            ..base
        }
    }
}
