//! Upgrade and spell research records (`upgrade_types.txt`)
//!
//! Ids index the parallel arrays of the UGRD section.

use indexmap::IndexMap;

use super::{TableEntry, TextRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeTypeRecord {
    pub id: u16,
    pub name: String,
    pub race: Option<String>,
    pub attributes: IndexMap<String, String>,
}

impl TableEntry for UpgradeTypeRecord {
    const FILE_NAME: &'static str = "upgrade_types.txt";

    fn from_record(mut record: TextRecord) -> std::result::Result<Self, String> {
        let name = record.take_name()?;
        let race = record.take("race");
        Ok(Self {
            id: record.id,
            name,
            race,
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
