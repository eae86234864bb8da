//! The full set of lookup tables a decoder validates against

use std::path::{Path, PathBuf};

use super::{
    LookupTable, MissileWeaponRecord, PlayerAiRecord, RaceRecord, TableEntry, TerrainRecord,
    UnitTypeRecord, UpgradeTypeRecord,
};
use crate::error::Result;

/// All text-database tables of the game.
///
/// Loaded once, then only read. Decoders borrow it, so a single instance can
/// back any number of decoders running on different threads.
#[derive(Debug, Clone, Default)]
pub struct GameDatabase {
    pub unit_types: LookupTable<UnitTypeRecord>,
    pub terrains: LookupTable<TerrainRecord>,
    pub races: LookupTable<RaceRecord>,
    pub player_ai: LookupTable<PlayerAiRecord>,
    pub missile_weapons: LookupTable<MissileWeaponRecord>,
    pub upgrade_types: LookupTable<UpgradeTypeRecord>,
}

impl GameDatabase {
    /// Load every table from `dir`.
    ///
    /// Fails with [`PudError::AssetLoadError`](crate::PudError::AssetLoadError)
    /// on the first missing or malformed file.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            unit_types: LookupTable::load(table_path::<UnitTypeRecord>(dir))?,
            terrains: LookupTable::load(table_path::<TerrainRecord>(dir))?,
            races: LookupTable::load(table_path::<RaceRecord>(dir))?,
            player_ai: LookupTable::load(table_path::<PlayerAiRecord>(dir))?,
            missile_weapons: LookupTable::load(table_path::<MissileWeaponRecord>(dir))?,
            upgrade_types: LookupTable::load(table_path::<UpgradeTypeRecord>(dir))?,
        })
    }

    /// Tables compiled into the library from the bundled `data/` directory.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            unit_types: builtin_table(include_str!("../../data/units.txt"))?,
            terrains: builtin_table(include_str!("../../data/terrains.txt"))?,
            races: builtin_table(include_str!("../../data/races.txt"))?,
            player_ai: builtin_table(include_str!("../../data/player_ai.txt"))?,
            missile_weapons: builtin_table(include_str!("../../data/missile_weapons.txt"))?,
            upgrade_types: builtin_table(include_str!("../../data/upgrade_types.txt"))?,
        })
    }

    /// Display name of a unit type
    pub fn unit_type_name(&self, id: u8) -> Option<&str> {
        self.unit_types.name_of(id as u16)
    }

    /// Display name of a terrain
    pub fn terrain_name(&self, id: u16) -> Option<&str> {
        self.terrains.name_of(id)
    }
}

fn table_path<T: TableEntry>(dir: &Path) -> PathBuf {
    dir.join(T::FILE_NAME)
}

fn builtin_table<T: TableEntry>(text: &str) -> Result<LookupTable<T>> {
    LookupTable::parse(text, &Path::new("<builtin>").join(T::FILE_NAME))
}
