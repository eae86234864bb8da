//! Computer player AI profiles (`player_ai.txt`)

use indexmap::IndexMap;

use super::{TableEntry, TextRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAiRecord {
    pub id: u16,
    pub name: String,
    pub attributes: IndexMap<String, String>,
}

impl TableEntry for PlayerAiRecord {
    const FILE_NAME: &'static str = "player_ai.txt";

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
