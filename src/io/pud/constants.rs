//! Layout constants of the PUD section stream.

/// Bytes in a section tag
pub const SECTION_TAG_LEN: usize = 4;
/// Bytes in a section length prefix (i32, little-endian)
pub const SECTION_LENGTH_LEN: usize = 4;

/// Player slots in every per-player section (8 players, 7 unused, 1 neutral)
pub const PLAYER_SLOTS: usize = 16;

/// Entries in the allowed-player-type table OWNR bytes index into.
///
/// Smaller than [`PLAYER_SLOTS`]: the table enumerates controller kinds,
/// the slot array enumerates players. Verify against authentic maps before
/// changing either.
pub const PLAYER_TYPE_TABLE_LEN: usize = 8;

/// Bytes per record in the UNIT section.
///
/// The record fields (x, y, type, owner, resource) fill only the first 8
/// bytes; the remaining 2 are skipped. Authentic game files pack records at
/// 8 bytes, so with this stride every record after the first of such a file
/// decodes misaligned. Set this to 8 to read those files.
pub const UNIT_RECORD_SIZE: usize = 10;

/// Default map size limits
pub const MAX_MAP_WIDTH: u16 = 128;
pub const MAX_MAP_HEIGHT: u16 = 128;

/// Raw versions accepted in the VER section
pub const ALLOWED_VERSIONS: [u16; 2] = [17, 19];

/// UDTA array cardinalities
pub mod unit_data {
    /// Unit types with per-type data
    pub const UNIT_TYPES: usize = 110;
    /// Entries in each graphics table
    pub const GRAPHICS: usize = 127;
    /// Entries in the right-click action table
    pub const MOUSE_ACTIONS: usize = 58;
    /// Entries in the flags table
    pub const FLAGS: usize = 109;
    /// Bytes consumed by the UDTA layout
    pub const PAYLOAD_SIZE: usize = 2
        + UNIT_TYPES * 2
        + GRAPHICS * 2 * 4
        + UNIT_TYPES * 4
        + UNIT_TYPES * 2
        + UNIT_TYPES * 5
        + UNIT_TYPES * 4 * 2
        + UNIT_TYPES * 14
        + MOUSE_ACTIONS
        + UNIT_TYPES * 2
        + UNIT_TYPES
        + FLAGS * 4;
}

/// UGRD array cardinalities
pub mod upgrade_data {
    /// Upgrade/spell research types
    pub const UPGRADE_TYPES: usize = 52;
    /// Bytes consumed by the UGRD layout
    pub const PAYLOAD_SIZE: usize = 2 + UPGRADE_TYPES + UPGRADE_TYPES * 2 * 5 + UPGRADE_TYPES * 4;
}
