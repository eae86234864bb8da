//! Race records (`races.txt`)

use indexmap::IndexMap;

use super::{TableEntry, TextRecord};

/// Name the race table uses for unplayable, neutral slots.
pub const NEUTRAL_RACE_NAME: &str = "neutral";

/// A player race
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceRecord {
    pub id: u16,
    pub name: String,
    pub attributes: IndexMap<String, String>,
}

/// Whether `name` is the neutral marker race, ignoring case.
pub fn is_neutral_race(name: &str) -> bool {
    name.eq_ignore_ascii_case(NEUTRAL_RACE_NAME)
}

impl RaceRecord {
    /// Whether this is the neutral marker race.
    pub fn is_neutral(&self) -> bool {
        is_neutral_race(&self.name)
    }
}

impl TableEntry for RaceRecord {
    const FILE_NAME: &'static str = "races.txt";

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
