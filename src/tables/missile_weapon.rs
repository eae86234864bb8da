//! Missile weapon records (`missile_weapons.txt`)
//!
//! Referenced by the `missile_weapon` array of the UDTA section.

use indexmap::IndexMap;

use super::{TableEntry, TextRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissileWeaponRecord {
    pub id: u16,
    pub name: String,
    pub attributes: IndexMap<String, String>,
}

impl TableEntry for MissileWeaponRecord {
    const FILE_NAME: &'static str = "missile_weapons.txt";

    fn from_record(mut record: TextRecord) -> std::result::Result<Self, String> {
        let name = record.take_name()?;
        Ok(Self {
            id: record.id,
            name,
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
