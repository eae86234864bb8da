//! Placed units

use std::fmt;

use super::classifier::{classify, UnitFlags};

/// One unit placed on the map by the UNIT section.
///
/// Classification flags are derived from `type_id` on every call; they are
/// not stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit {
    /// Tile column
    pub x: u16,
    /// Tile row
    pub y: u16,
    /// Raw unit-type id
    pub type_id: u8,
    /// Owning player slot
    pub owner_id: u8,
    /// Gold/oil amount for mines and patches, otherwise a unit-specific value
    pub resource: u16,
    /// Display name from the unit-type table, filled in when the map is folded
    pub type_name: Option<String>,
}

impl Unit {
    pub fn new(x: u16, y: u16, type_id: u8, owner_id: u8, resource: u16) -> Self {
        Self {
            x,
            y,
            type_id,
            owner_id,
            resource,
            type_name: None,
        }
    }

    /// Semantic categories of this unit's type
    pub fn flags(&self) -> UnitFlags {
        classify(self.type_id)
    }

    pub fn is_hero(&self) -> bool {
        self.flags().contains(UnitFlags::HERO)
    }

    pub fn is_peasant(&self) -> bool {
        self.flags().contains(UnitFlags::PEASANT)
    }

    pub fn is_building(&self) -> bool {
        self.flags().contains(UnitFlags::BUILDING)
    }

    pub fn is_special(&self) -> bool {
        self.flags().contains(UnitFlags::SPECIAL)
    }

    pub fn is_goldmine(&self) -> bool {
        self.flags().contains(UnitFlags::GOLDMINE)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_name {
            Some(name) => write!(f, "{} ({}, {})", name, self.x, self.y),
            None => write!(f, "unit type {} ({}, {})", self.type_id, self.x, self.y),
        }
    }
}
