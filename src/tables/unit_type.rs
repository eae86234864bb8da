//! Unit type records (`units.txt`)

use indexmap::IndexMap;

use super::{TableEntry, TextRecord};

/// A unit type: display name plus optional owning race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTypeRecord {
    pub id: u16,
    pub name: String,
    /// Race the unit belongs to, if the database says so
    pub race: Option<String>,
    /// Any further attributes, verbatim
    pub attributes: IndexMap<String, String>,
}

impl TableEntry for UnitTypeRecord {
    const FILE_NAME: &'static str = "units.txt";

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
