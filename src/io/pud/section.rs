//! Decoded section values

use super::constants::PLAYER_SLOTS;
use super::section_tag::SectionTag;
use crate::entities::{TileGrid, Unit};
use crate::objects::{UnitData, UpgradeData};
use crate::types::{FixedText, MapDimensions, MapId, PudVersion};

/// Contents of the TYPE section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeHeader {
    /// File identification text, normally `WAR2 MAP`
    pub type_text: FixedText<10>,
    pub reserved: [u8; 2],
    pub id: MapId,
}

/// The value decoded from one section's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionData {
    Type(TypeHeader),
    Version(PudVersion),
    Description(FixedText<32>),
    /// Raw OWNR bytes, each already checked against the player type table
    Owners([u8; PLAYER_SLOTS]),
    /// Raw SIDE bytes (race ids)
    Races([u8; PLAYER_SLOTS]),
    /// Raw AIPL bytes (AI profile ids)
    AiProfiles([u8; PLAYER_SLOTS]),
    StartingGold([u16; PLAYER_SLOTS]),
    StartingLumber([u16; PLAYER_SLOTS]),
    StartingOil([u16; PLAYER_SLOTS]),
    /// ERA terrain id, known to resolve in the terrain table
    Terrain(u16),
    /// ERAX terrain id, known to resolve in the terrain table
    TerrainExpansion(u16),
    Dimensions(MapDimensions),
    UnitData(Box<UnitData>),
    UpgradeData(Box<UpgradeData>),
    Tiles(TileGrid),
    MovementMap(TileGrid),
    /// OILM keeps one cell per two tiles, so it is not a grid
    OilMap(Vec<u16>),
    ActionMap(TileGrid),
    Units(Vec<Unit>),
    Signature(u32),
    /// ALOW is read and dropped
    Restrictions,
}

/// One decoded section and where it started in the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub tag: SectionTag,
    /// Offset of the section header from the start of the stream
    pub offset: u64,
    /// Declared payload length
    pub length: u32,
    pub data: SectionData,
}

impl Section {
    /// Split into the tag and decoded value.
    pub fn into_pair(self) -> (SectionTag, SectionData) {
        (self.tag, self.data)
    }
}
