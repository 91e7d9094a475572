//! Content factory for building combat tables from data files.

use std::path::{Path, PathBuf};

use combat_core::CombatConfig;

use crate::bundle::ContentBundle;
use crate::loaders::{ConfigLoader, LoadResult, NpcLoader, WeaponLoader};
use crate::npcs::NpcCatalog;
use crate::weapons::WeaponCatalog;

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── weapons.ron
/// └── npcs.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the weapon catalog from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<WeaponCatalog> {
        WeaponLoader::load(&self.data_dir.join("weapons.ron"))
    }

    /// Load NPC templates from `npcs.ron`.
    pub fn load_npcs(&self) -> LoadResult<NpcCatalog> {
        NpcLoader::load(&self.data_dir.join("npcs.ron"))
    }

    /// Load every table.
    pub fn load(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            config: self.load_config()?,
            weapons: self.load_weapons()?,
            npcs: self.load_npcs()?,
        })
    }
}
