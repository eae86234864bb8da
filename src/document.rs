//! PUD document structure

use std::collections::BTreeSet;

use crate::entities::{PlayerSlot, PlayerType, TileGrid, Unit};
use crate::io::pud::constants::PLAYER_SLOTS;
use crate::io::pud::{Section, SectionData};
use crate::notification::{NotificationCollection, NotificationType};
use crate::objects::{UnitData, UpgradeData};
use crate::summary_info::MapSummary;
use crate::tables::GameDatabase;
use crate::types::{FixedText, MapDimensions, MapId, PudVersion};
use crate::Result;

/// A decoded map.
///
/// Built by folding decoded sections in file order with [`PudDocument::apply`].
/// Fields stay at their defaults for sections the file does not contain.
#[derive(Debug, Clone, PartialEq)]
pub struct PudDocument {
    /// TYPE identification text
    pub pud_type: FixedText<10>,
    /// Multiplayer consistency id
    pub id: MapId,
    pub version: Option<PudVersion>,
    pub description: FixedText<32>,
    pub dimensions: Option<MapDimensions>,
    /// One entry per player slot, always [`PLAYER_SLOTS`] long
    pub players: Vec<PlayerSlot>,
    pub units: Vec<Unit>,
    /// MTXM tile map
    pub tiles: Option<TileGrid>,
    /// SQM movement map
    pub movement_map: Option<TileGrid>,
    /// REGM action map
    pub action_map: Option<TileGrid>,
    /// OILM cells, kept raw
    pub oil_map: Option<Vec<u16>>,
    pub terrain_id: Option<u16>,
    /// Terrain name from ERA
    pub terrain: Option<String>,
    pub terrain_x_id: Option<u16>,
    /// Terrain name from ERAX
    pub terrain_x: Option<String>,
    pub unit_data: Option<UnitData>,
    pub upgrade_data: Option<UpgradeData>,
    pub signature: Option<u32>,
    /// Non-fatal issues noticed while folding
    pub notifications: NotificationCollection,
}

impl PudDocument {
    /// Create an empty document with all player slots unset
    pub fn new() -> Self {
        Self {
            pud_type: FixedText::default(),
            id: MapId::default(),
            version: None,
            description: FixedText::default(),
            dimensions: None,
            players: (0..PLAYER_SLOTS).map(PlayerSlot::new).collect(),
            units: Vec::new(),
            tiles: None,
            movement_map: None,
            action_map: None,
            oil_map: None,
            terrain_id: None,
            terrain: None,
            terrain_x_id: None,
            terrain_x: None,
            unit_data: None,
            upgrade_data: None,
            signature: None,
            notifications: NotificationCollection::new(),
        }
    }

    /// Fold a whole section sequence, stopping at the first error.
    pub fn from_sections<I>(sections: I, database: &GameDatabase) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Section>>,
    {
        let mut document = Self::new();
        for section in sections {
            document.apply(section?, database);
        }
        Ok(document)
    }

    /// Fold one decoded section into the document.
    ///
    /// Lookups against `database` that miss leave the name unset and add a
    /// [`NotificationType::MissingLookup`] notification.
    pub fn apply(&mut self, section: Section, database: &GameDatabase) {
        match section.data {
            SectionData::Type(header) => {
                self.pud_type = header.type_text;
                self.id = header.id;
            }
            SectionData::Version(version) => self.version = Some(version),
            SectionData::Description(text) => self.description = text,
            SectionData::Owners(owners) => {
                for (player, &type_id) in self.players.iter_mut().zip(owners.iter()) {
                    player.type_id = Some(type_id);
                    player.player_type = PlayerType::from_id(type_id);
                }
            }
            SectionData::Races(races) => {
                for (player, &race_id) in self.players.iter_mut().zip(races.iter()) {
                    player.race_id = Some(race_id);
                    player.race = database.races.name_of(race_id.into()).map(str::to_string);
                    if player.race.is_none() {
                        self.notifications.notify(
                            NotificationType::MissingLookup,
                            format!("Race {} of player {} not in race table", race_id, player.index),
                        );
                    }
                }
            }
            SectionData::AiProfiles(profiles) => {
                for (player, &ai_id) in self.players.iter_mut().zip(profiles.iter()) {
                    player.ai_id = Some(ai_id);
                    player.ai_name = database.player_ai.name_of(ai_id.into()).map(str::to_string);
                    if player.ai_name.is_none() {
                        self.notifications.notify(
                            NotificationType::MissingLookup,
                            format!("AI profile {} of player {} not in AI table", ai_id, player.index),
                        );
                    }
                }
            }
            SectionData::StartingGold(values) => {
                for (player, &v) in self.players.iter_mut().zip(values.iter()) {
                    player.gold = v;
                }
            }
            SectionData::StartingLumber(values) => {
                for (player, &v) in self.players.iter_mut().zip(values.iter()) {
                    player.lumber = v;
                }
            }
            SectionData::StartingOil(values) => {
                for (player, &v) in self.players.iter_mut().zip(values.iter()) {
                    player.oil = v;
                }
            }
            SectionData::Terrain(id) => {
                self.terrain_id = Some(id);
                self.terrain = self.terrain_name(id, database);
            }
            SectionData::TerrainExpansion(id) => {
                self.terrain_x_id = Some(id);
                self.terrain_x = self.terrain_name(id, database);
            }
            SectionData::Dimensions(dimensions) => {
                if let Some(previous) = self.dimensions {
                    self.notifications.notify(
                        NotificationType::Warning,
                        format!("DIM section repeated: {} replaces {}", dimensions, previous),
                    );
                }
                self.dimensions = Some(dimensions);
            }
            SectionData::UnitData(data) => self.unit_data = Some(*data),
            SectionData::UpgradeData(data) => self.upgrade_data = Some(*data),
            SectionData::Tiles(grid) => self.tiles = Some(grid),
            SectionData::MovementMap(grid) => self.movement_map = Some(grid),
            SectionData::ActionMap(grid) => self.action_map = Some(grid),
            SectionData::OilMap(cells) => self.oil_map = Some(cells),
            SectionData::Units(units) => self.set_units(units, database),
            SectionData::Signature(signature) => self.signature = Some(signature),
            SectionData::Restrictions => self.notifications.notify(
                NotificationType::NotImplemented,
                "ALOW section skipped",
            ),
        }
    }

    fn terrain_name(&mut self, id: u16, database: &GameDatabase) -> Option<String> {
        let name = database.terrain_name(id).map(str::to_string);
        if name.is_none() {
            self.notifications.notify(
                NotificationType::MissingLookup,
                format!("Terrain {} not in terrain table", id),
            );
        }
        name
    }

    /// A later UNIT section replaces the units of an earlier one.
    fn set_units(&mut self, mut units: Vec<Unit>, database: &GameDatabase) {
        let mut missing = BTreeSet::new();
        for unit in &mut units {
            unit.type_name = database.unit_type_name(unit.type_id).map(str::to_string);
            if unit.type_name.is_none() {
                missing.insert(unit.type_id);
            }
        }
        for type_id in missing {
            self.notifications.notify(
                NotificationType::MissingLookup,
                format!("Unit type {} not in unit table", type_id),
            );
        }
        self.units = units;
    }

    /// Map width, 0 before DIM
    pub fn width(&self) -> u16 {
        self.dimensions.map_or(0, |d| d.width)
    }

    /// Map height, 0 before DIM
    pub fn height(&self) -> u16 {
        self.dimensions.map_or(0, |d| d.height)
    }

    /// Players taking part in the game
    pub fn active_players(&self) -> impl Iterator<Item = &PlayerSlot> {
        self.players.iter().filter(|p| p.is_active())
    }

    /// The slot owning `unit`
    pub fn owner_of(&self, unit: &Unit) -> Option<&PlayerSlot> {
        self.players.get(unit.owner_id as usize)
    }

    pub fn summary(&self) -> MapSummary {
        MapSummary::from_document(self)
    }
}

impl Default for PudDocument {
    fn default() -> Self {
        Self::new()
    }
}
