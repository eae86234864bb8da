//! Per-tag payload decoding

use super::constants::{unit_data as udta, upgrade_data as ugrd, PLAYER_SLOTS, UNIT_RECORD_SIZE};
use super::reader::PudReaderConfiguration;
use super::section::{SectionData, TypeHeader};
use super::section_tag::SectionTag;
use super::stream_reader::PayloadReader;
use crate::entities::{PlayerType, TileGrid, Unit};
use crate::error::{PudError, Result};
use crate::objects::{UnitData, UpgradeData};
use crate::tables::GameDatabase;
use crate::types::{FixedText, MapDimensions, MapId, PudVersion};

/// Decodes section payloads and carries the dimension context between them.
///
/// One instance per stream. The only state it keeps is the width and height
/// set by the most recent DIM section.
pub struct SectionDecoder<'db> {
    database: &'db GameDatabase,
    config: PudReaderConfiguration,
    dimensions: Option<MapDimensions>,
}

impl<'db> SectionDecoder<'db> {
    pub fn new(database: &'db GameDatabase, config: PudReaderConfiguration) -> Self {
        Self {
            database,
            config,
            dimensions: None,
        }
    }

    /// Dimensions set by the last DIM section, if any
    pub fn dimensions(&self) -> Option<MapDimensions> {
        self.dimensions
    }

    /// Decode one payload. Bytes past the end of a fixed layout are ignored.
    pub fn decode(&mut self, tag: SectionTag, payload: &[u8]) -> Result<SectionData> {
        let mut r = PayloadReader::new(tag, payload);
        match tag {
            SectionTag::Type => read_type(&mut r),
            SectionTag::Ver => read_version(&mut r),
            SectionTag::Desc => Ok(SectionData::Description(FixedText::new(r.read_array()?))),
            SectionTag::Ownr => read_owners(&mut r),
            SectionTag::Side => Ok(SectionData::Races(r.read_array()?)),
            SectionTag::Aipl => Ok(SectionData::AiProfiles(r.read_array()?)),
            SectionTag::Sgld => Ok(SectionData::StartingGold(r.read_u16_slots()?)),
            SectionTag::Slbr => Ok(SectionData::StartingLumber(r.read_u16_slots()?)),
            SectionTag::Soil => Ok(SectionData::StartingOil(r.read_u16_slots()?)),
            SectionTag::Era => self.read_terrain(&mut r).map(SectionData::Terrain),
            SectionTag::Erax => self.read_terrain(&mut r).map(SectionData::TerrainExpansion),
            SectionTag::Dim => self.read_dimensions(&mut r),
            SectionTag::Udta => read_unit_data(&mut r),
            SectionTag::Ugrd => read_upgrade_data(&mut r),
            SectionTag::Mtxm => self.read_grid(&mut r).map(SectionData::Tiles),
            SectionTag::Sqm => self.read_grid(&mut r).map(SectionData::MovementMap),
            SectionTag::Regm => self.read_grid(&mut r).map(SectionData::ActionMap),
            SectionTag::Oilm => self.read_oil_map(&mut r),
            SectionTag::Unit => self.read_units(&mut r),
            SectionTag::Sign => Ok(SectionData::Signature(r.read_u32()?)),
            SectionTag::Alow => Ok(SectionData::Restrictions),
        }
    }

    fn read_terrain(&self, r: &mut PayloadReader<'_>) -> Result<u16> {
        let id = r.read_u16()?;
        if !self.database.terrains.contains(id) {
            return Err(PudError::UnknownTerrain(id));
        }
        Ok(id)
    }

    fn read_dimensions(&mut self, r: &mut PayloadReader<'_>) -> Result<SectionData> {
        let width = r.read_u16()?;
        let height = r.read_u16()?;
        check_axis("width", width, self.config.max_map_width)?;
        check_axis("height", height, self.config.max_map_height)?;
        let dimensions = MapDimensions::new(width, height);
        self.dimensions = Some(dimensions);
        Ok(SectionData::Dimensions(dimensions))
    }

    fn require_dimensions(&self, tag: SectionTag) -> Result<MapDimensions> {
        self.dimensions
            .ok_or_else(|| PudError::MissingDimensionContext(tag.to_string()))
    }

    fn read_grid(&self, r: &mut PayloadReader<'_>) -> Result<TileGrid> {
        let dimensions = self.require_dimensions(r.tag())?;
        let needed = dimensions.cell_count();
        let cells = r.read_u16_vec(needed)?;
        TileGrid::from_cells(dimensions, cells).ok_or_else(|| PudError::SectionTooShort {
            tag: r.tag().to_string(),
            needed: needed * 2,
            available: r.len(),
        })
    }

    fn read_oil_map(&self, r: &mut PayloadReader<'_>) -> Result<SectionData> {
        let dimensions = self.require_dimensions(SectionTag::Oilm)?;
        let cells = r.read_u16_vec(dimensions.cell_count() / 2)?;
        Ok(SectionData::OilMap(cells))
    }

    fn read_units(&self, r: &mut PayloadReader<'_>) -> Result<SectionData> {
        let count = r.remaining() / UNIT_RECORD_SIZE;
        let remainder = r.remaining() % UNIT_RECORD_SIZE;
        if remainder != 0 {
            if self.config.strict_unit_records {
                return Err(PudError::TrailingUnitBytes { remainder });
            }
            tracing::debug!(remainder, "Ignoring trailing UNIT bytes");
        }

        let mut units = Vec::with_capacity(count);
        for _ in 0..count {
            let x = r.read_u16()?;
            let y = r.read_u16()?;
            let type_id = r.read_u8()?;
            let owner_id = r.read_u8()?;
            let resource = r.read_u16()?;
            r.read_bytes(UNIT_RECORD_SIZE - UNIT_FIELDS_SIZE)?;
            units.push(Unit::new(x, y, type_id, owner_id, resource));
        }
        Ok(SectionData::Units(units))
    }
}

/// Bytes of a unit record holding fields; the rest of the record is padding
const UNIT_FIELDS_SIZE: usize = 8;

fn check_axis(axis: &'static str, value: u16, max: u16) -> Result<()> {
    if value > max {
        return Err(PudError::MapDimensionExceeded { axis, value, max });
    }
    Ok(())
}

fn read_type(r: &mut PayloadReader<'_>) -> Result<SectionData> {
    let type_text = FixedText::new(r.read_array()?);
    let reserved = r.read_array()?;
    let id = MapId::new(r.read_u32()?);
    Ok(SectionData::Type(TypeHeader {
        type_text,
        reserved,
        id,
    }))
}

fn read_version(r: &mut PayloadReader<'_>) -> Result<SectionData> {
    let raw = r.read_u16()?;
    PudVersion::from_u16(raw)
        .map(SectionData::Version)
        .ok_or(PudError::UnsupportedVersion(raw))
}

fn read_owners(r: &mut PayloadReader<'_>) -> Result<SectionData> {
    let owners: [u8; PLAYER_SLOTS] = r.read_array()?;
    for (slot, &player_type) in owners.iter().enumerate() {
        if PlayerType::from_id(player_type).is_none() {
            return Err(PudError::InvalidPlayerType { slot, player_type });
        }
    }
    Ok(SectionData::Owners(owners))
}

fn read_unit_data(r: &mut PayloadReader<'_>) -> Result<SectionData> {
    r.require(udta::PAYLOAD_SIZE)?;
    let n = udta::UNIT_TYPES;
    let g = udta::GRAPHICS;

    // field order is the on-disk order
    let data = UnitData {
        use_default: r.read_u16()?,
        first_construction_frame: r.read_u8_vec(n)?,
        second_construction_frame: r.read_u8_vec(n)?,
        general_unit_gfx: r.read_u16_vec(g)?,
        summer_unit_gfx: r.read_u16_vec(g)?,
        winter_unit_gfx: r.read_u16_vec(g)?,
        wasteland_unit_gfx: r.read_u16_vec(g)?,
        sight_range: r.read_u32_vec(n)?,
        hit_points: r.read_u16_vec(n)?,
        magic: r.read_u8_vec(n)?,
        build_time: r.read_u8_vec(n)?,
        gold_cost: r.read_u8_vec(n)?,
        lumber_cost: r.read_u8_vec(n)?,
        oil_cost: r.read_u8_vec(n)?,
        unit_size: r.read_u32_vec(n)?,
        box_size: r.read_u32_vec(n)?,
        attack_range: r.read_u8_vec(n)?,
        reaction_range_cpu: r.read_u8_vec(n)?,
        reaction_range_human: r.read_u8_vec(n)?,
        armor: r.read_u8_vec(n)?,
        selectable_by_rect: r.read_u8_vec(n)?,
        priority: r.read_u8_vec(n)?,
        basic_damage: r.read_u8_vec(n)?,
        piercing_damage: r.read_u8_vec(n)?,
        weapons_upgradeable: r.read_u8_vec(n)?,
        armor_upgradeable: r.read_u8_vec(n)?,
        missile_weapon: r.read_u8_vec(n)?,
        unit_type: r.read_u8_vec(n)?,
        decay_rate: r.read_u8_vec(n)?,
        annoy_cpu_factor: r.read_u8_vec(n)?,
        mouse_btn_2_action: r.read_u8_vec(udta::MOUSE_ACTIONS)?,
        point_value_for_kill_unit: r.read_u16_vec(n)?,
        can_target: r.read_u8_vec(n)?,
        flags: r.read_u32_vec(udta::FLAGS)?,
    };
    Ok(SectionData::UnitData(Box::new(data)))
}

fn read_upgrade_data(r: &mut PayloadReader<'_>) -> Result<SectionData> {
    r.require(ugrd::PAYLOAD_SIZE)?;
    let n = ugrd::UPGRADE_TYPES;

    let data = UpgradeData {
        use_default: r.read_u16()?,
        upgrade_time: r.read_u8_vec(n)?,
        gold_cost: r.read_u16_vec(n)?,
        lumber_cost: r.read_u16_vec(n)?,
        oil_cost: r.read_u16_vec(n)?,
        upgrade_icon: r.read_u16_vec(n)?,
        group_applies_to: r.read_u16_vec(n)?,
        affect_flags: r.read_u32_vec(n)?,
    };
    Ok(SectionData::UpgradeData(Box::new(data)))
}
