//! Map identity tag
//!
//! The TYPE section carries a 32-bit id used for the consistency check in
//! multiplayer games: all players must hold a map with the same id.

use std::fmt;

/// The 32-bit consistency id of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MapId(u32);

impl MapId {
    #[inline]
    pub const fn new(value: u32) -> Self {
        MapId(value)
    }

    /// Get the raw u32 value
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for MapId {
    fn from(value: u32) -> Self {
        MapId(value)
    }
}

impl From<MapId> for u32 {
    fn from(id: MapId) -> Self {
        id.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::UpperHex for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
