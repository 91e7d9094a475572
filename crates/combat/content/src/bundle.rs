//! Everything a host needs to start fights, bundled together.

use combat_core::CombatConfig;

use crate::npcs::NpcCatalog;
use crate::weapons::WeaponCatalog;

/// Combat configuration plus the weapon and NPC tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBundle {
    pub config: CombatConfig,
    pub weapons: WeaponCatalog,
    pub npcs: NpcCatalog,
}

impl ContentBundle {
    /// Stock tables compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            config: CombatConfig::default(),
            weapons: WeaponCatalog::builtin(),
            npcs: NpcCatalog::builtin(),
        }
    }
}

impl Default for ContentBundle {
    fn default() -> Self {
        Self::builtin()
    }
}
