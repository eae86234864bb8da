//! Lookup tables loaded from the game's text databases
//!
//! Every table maps a numeric id to a record carrying at least a display name.
//! Tables are built once and never mutated; a [`GameDatabase`] holding all of
//! them can be shared read-only between any number of decoders.

use indexmap::IndexMap;
use std::path::Path;

use crate::error::{PudError, Result};

pub mod database;
pub mod missile_weapon;
pub mod player_ai;
pub mod race;
pub mod terrain;
pub mod text_database;
pub mod unit_type;
pub mod upgrade_type;

pub use database::GameDatabase;
pub use missile_weapon::MissileWeaponRecord;
pub use player_ai::PlayerAiRecord;
pub use race::RaceRecord;
pub use terrain::TerrainRecord;
pub use text_database::TextRecord;
pub use unit_type::UnitTypeRecord;
pub use upgrade_type::UpgradeTypeRecord;

/// A record type that can be built from one text-database line.
pub trait TableEntry: Sized {
    /// File name of the table inside a data directory.
    const FILE_NAME: &'static str;

    /// Build the record, or explain why the line is unusable.
    fn from_record(record: TextRecord) -> std::result::Result<Self, String>;

    /// The record's numeric id
    fn id(&self) -> u16;

    /// The record's display name
    fn name(&self) -> &str;
}

/// Immutable id → record table
#[derive(Debug, Clone)]
pub struct LookupTable<T: TableEntry> {
    entries: IndexMap<u16, T>,
}

impl<T: TableEntry> LookupTable<T> {
    /// Build a table from already constructed records. Duplicate ids are rejected.
    pub fn from_entries<I>(entries: I) -> std::result::Result<Self, String>
    where
        I: IntoIterator<Item = T>,
    {
        let mut map = IndexMap::new();
        for entry in entries {
            let id = entry.id();
            if map.insert(id, entry).is_some() {
                return Err(format!("duplicate id {}", id));
            }
        }
        Ok(Self { entries: map })
    }

    /// Parse a table from text. `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let mut records = Vec::new();
        for (line_number, record) in text_database::parse_records(text, origin)? {
            let entry = T::from_record(record).map_err(|reason| {
                PudError::asset(origin, format!("line {}: {}", line_number, reason))
            })?;
            records.push(entry);
        }
        let table = Self::from_entries(records).map_err(|reason| PudError::asset(origin, reason))?;
        tracing::info!(
            table = T::FILE_NAME,
            records = table.len(),
            "Loaded lookup table"
        );
        Ok(table)
    }

    /// Read and parse a table file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PudError::AssetLoadError {
            path: path.to_path_buf(),
            reason: "cannot read resource".to_string(),
            source: Some(e),
        })?;
        Self::parse(&text, path)
    }

    /// Get a record by id
    pub fn get(&self, id: u16) -> Option<&T> {
        self.entries.get(&id)
    }

    /// Check if a record exists
    pub fn contains(&self, id: u16) -> bool {
        self.entries.contains_key(&id)
    }

    /// Display name of a record, if present
    pub fn name_of(&self, id: u16) -> Option<&str> {
        self.get(id).map(|e| e.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all records in file order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Get all record names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name())
    }
}

impl<T: TableEntry> Default for LookupTable<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}
