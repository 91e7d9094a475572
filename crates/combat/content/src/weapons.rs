//! Weapon catalog.
//!
//! A weapon decides the wielder's attack cadence and contributes flat attack and
//! strength bonuses. Unknown ids fall back to bare hands.

use combat_core::CombatBonuses;

use crate::error::ContentError;

/// Id of the fallback weapon every catalog must contain.
pub const UNARMED_ID: &str = "unarmed";

/// Static weapon definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponDefinition {
    pub id: String,
    pub name: String,
    /// Milliseconds between swings; lower is faster.
    pub attack_speed_ms: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_bonus: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strength_bonus: i32,
    /// Debug weapons that always hit for a lethal amount.
    #[cfg_attr(feature = "serde", serde(default))]
    pub insta_kill: bool,
}

impl WeaponDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, attack_speed_ms: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attack_speed_ms,
            attack_bonus: 0,
            strength_bonus: 0,
            insta_kill: false,
        }
    }

    #[must_use]
    pub fn with_bonuses(mut self, attack_bonus: i32, strength_bonus: i32) -> Self {
        self.attack_bonus = attack_bonus;
        self.strength_bonus = strength_bonus;
        self
    }

    #[must_use]
    pub fn with_insta_kill(mut self) -> Self {
        self.insta_kill = true;
        self
    }

    /// Weapons never grant defense.
    pub fn bonuses(&self) -> CombatBonuses {
        CombatBonuses::new(self.attack_bonus, self.strength_bonus, 0)
    }
}

/// Weapon lookup table, guaranteed to contain [`UNARMED_ID`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeaponCatalog {
    weapons: Vec<WeaponDefinition>,
    unarmed: usize,
}

impl WeaponCatalog {
    /// Validates and indexes a list of weapons.
    pub fn new(weapons: Vec<WeaponDefinition>) -> Result<Self, ContentError> {
        for (index, weapon) in weapons.iter().enumerate() {
            if weapon.attack_speed_ms == 0 {
                return Err(ContentError::ZeroAttackSpeed(weapon.id.clone()));
            }
            if weapons[..index].iter().any(|other| other.id == weapon.id) {
                return Err(ContentError::DuplicateId {
                    kind: "weapon",
                    id: weapon.id.clone(),
                });
            }
        }

        let unarmed = weapons
            .iter()
            .position(|weapon| weapon.id == UNARMED_ID)
            .ok_or(ContentError::MissingUnarmed)?;

        Ok(Self { weapons, unarmed })
    }

    /// The stock weapons: bare hands, dagger, longsword and a debug dagger.
    pub fn builtin() -> Self {
        let weapons = vec![
            WeaponDefinition::new(UNARMED_ID, "Unarmed", 2400),
            WeaponDefinition::new("dagger", "Dagger", 3000).with_bonuses(7, 4),
            WeaponDefinition::new("longsword", "Longsword", 3600).with_bonuses(18, 19),
            WeaponDefinition::new("debug_dagger", "[DEBUG] Insta-kill Dagger", 1200)
                .with_bonuses(999, 999)
                .with_insta_kill(),
        ];
        let unarmed = 0;
        Self { weapons, unarmed }
    }

    /// Looks up `id`, falling back to bare hands for unknown ids.
    pub fn get(&self, id: &str) -> &WeaponDefinition {
        self.find(id).unwrap_or_else(|| self.unarmed())
    }

    /// Looks up `id` without the fallback.
    pub fn find(&self, id: &str) -> Option<&WeaponDefinition> {
        self.weapons.iter().find(|weapon| weapon.id == id)
    }

    pub fn unarmed(&self) -> &WeaponDefinition {
        &self.weapons[self.unarmed]
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaponDefinition> {
        self.weapons.iter()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

impl Default for WeaponCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_matches_stock_weapons() {
        let catalog = WeaponCatalog::builtin();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("dagger").attack_speed_ms, 3000);
        assert_eq!(catalog.get("longsword").bonuses(), CombatBonuses::new(18, 19, 0));
        assert!(catalog.get("debug_dagger").insta_kill);
        assert_eq!(catalog.unarmed().attack_speed_ms, 2400);
    }

    #[test]
    fn unknown_weapon_falls_back_to_unarmed() {
        let catalog = WeaponCatalog::builtin();

        assert_eq!(catalog.get("excalibur").id, UNARMED_ID);
        assert!(catalog.find("excalibur").is_none());
    }

    #[test]
    fn catalog_requires_unarmed() {
        let result = WeaponCatalog::new(vec![WeaponDefinition::new("dagger", "Dagger", 3000)]);
        assert_eq!(result, Err(ContentError::MissingUnarmed));
    }

    #[test]
    fn catalog_rejects_bad_entries() {
        let zero = WeaponCatalog::new(vec![WeaponDefinition::new(UNARMED_ID, "Unarmed", 0)]);
        assert_eq!(zero, Err(ContentError::ZeroAttackSpeed(UNARMED_ID.into())));

        let duplicate = WeaponCatalog::new(vec![
            WeaponDefinition::new(UNARMED_ID, "Unarmed", 2400),
            WeaponDefinition::new(UNARMED_ID, "Fists", 2000),
        ]);
        assert_eq!(
            duplicate,
            Err(ContentError::DuplicateId {
                kind: "weapon",
                id: UNARMED_ID.into()
            })
        );
    }
}
