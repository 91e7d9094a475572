//! NPC template loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::npcs::{NpcCatalog, NpcTemplate};

/// NPC table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcTable {
    pub npcs: Vec<NpcTemplate>,
}

/// Loader for NPC templates from RON files.
pub struct NpcLoader;

impl NpcLoader {
    pub fn load(path: &Path) -> LoadResult<NpcCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<NpcCatalog> {
        let table: NpcTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse npc table RON: {}", e))?;

        Ok(NpcCatalog::new(table.npcs)?)
    }
}
