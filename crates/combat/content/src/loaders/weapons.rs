//! Weapon catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::weapons::{WeaponCatalog, WeaponDefinition};

/// Weapon table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponTable {
    pub weapons: Vec<WeaponDefinition>,
}

/// Loader for the weapon catalog from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load and validate a weapon catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<WeaponCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a weapon catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<WeaponCatalog> {
        let table: WeaponTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon table RON: {}", e))?;

        Ok(WeaponCatalog::new(table.weapons)?)
    }
}
