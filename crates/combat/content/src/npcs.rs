//! NPC templates.

use combat_core::CombatBonuses;

use crate::error::ContentError;

/// Base stats of a monster kind. Every spawn starts at full hitpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcTemplate {
    pub id: String,
    pub name: String,
    pub hitpoints: u32,
    pub attack: u32,
    pub strength: u32,
    pub defense: u32,
    /// Milliseconds between swings; `0` for targets that never fight back.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_speed_ms: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: CombatBonuses,
    /// Experience awarded to the player for a kill.
    #[cfg_attr(feature = "serde", serde(default))]
    pub experience: u64,
}

impl NpcTemplate {
    /// The stock training target.
    pub fn chicken() -> Self {
        Self {
            id: "chicken".into(),
            name: "Chicken".into(),
            hitpoints: 3,
            attack: 1,
            strength: 1,
            defense: 1,
            attack_speed_ms: 3000,
            bonuses: CombatBonuses::NONE,
            experience: 5,
        }
    }
}

/// NPC lookup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NpcCatalog {
    npcs: Vec<NpcTemplate>,
}

impl NpcCatalog {
    pub fn new(npcs: Vec<NpcTemplate>) -> Result<Self, ContentError> {
        for (index, npc) in npcs.iter().enumerate() {
            if npcs[..index].iter().any(|other| other.id == npc.id) {
                return Err(ContentError::DuplicateId {
                    kind: "npc",
                    id: npc.id.clone(),
                });
            }
        }
        Ok(Self { npcs })
    }

    pub fn builtin() -> Self {
        Self {
            npcs: vec![NpcTemplate::chicken()],
        }
    }

    pub fn get(&self, id: &str) -> Result<&NpcTemplate, ContentError> {
        self.npcs
            .iter()
            .find(|npc| npc.id == id)
            .ok_or_else(|| ContentError::UnknownNpc(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &NpcTemplate> {
        self.npcs.iter()
    }

    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }
}

impl Default for NpcCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
