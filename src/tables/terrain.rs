//! Terrain records (`terrains.txt`)

use indexmap::IndexMap;

use super::{TableEntry, TextRecord};

/// A terrain (tileset) type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainRecord {
    pub id: u16,
    pub name: String,
    /// Tile sheet a renderer should use for this terrain
    pub tileset: Option<String>,
    pub attributes: IndexMap<String, String>,
}

impl TableEntry for TerrainRecord {
    const FILE_NAME: &'static str = "terrains.txt";

    fn from_record(mut record: TextRecord) -> std::result::Result<Self, String> {
        let name = record.take_name()?;
        let tileset = record.take("tileset");
        Ok(Self {
            id: record.id,
            name,
            tileset,
            attributes: record.attributes,
        })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
