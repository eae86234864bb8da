//! Section tags of the PUD container

use std::fmt;

/// Every section tag the format defines.
///
/// Unrecognized tags never become a `SectionTag`; the reader reports them as
/// [`PudError::UnknownSection`](crate::PudError::UnknownSection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionTag {
    /// File identification and consistency id
    Type,
    /// Format version
    Ver,
    /// Map description
    Desc,
    /// Controller of each player slot
    Ownr,
    /// Race of each player slot
    Side,
    /// AI profile of each player slot
    Aipl,
    /// Starting gold
    Sgld,
    /// Starting lumber
    Slbr,
    /// Starting oil
    Soil,
    /// Terrain type
    Era,
    /// Terrain type (expansion)
    Erax,
    /// Map dimensions
    Dim,
    /// Unit data
    Udta,
    /// Upgrade data
    Ugrd,
    /// Tile map
    Mtxm,
    /// Movement map
    Sqm,
    /// Oil concentration map (obsolete)
    Oilm,
    /// Action map
    Regm,
    /// Placed units
    Unit,
    /// Signature
    Sign,
    /// Allowed units/spells/upgrades
    Alow,
}

impl SectionTag {
    pub const ALL: [SectionTag; 21] = [
        SectionTag::Type,
        SectionTag::Ver,
        SectionTag::Desc,
        SectionTag::Ownr,
        SectionTag::Side,
        SectionTag::Aipl,
        SectionTag::Sgld,
        SectionTag::Slbr,
        SectionTag::Soil,
        SectionTag::Era,
        SectionTag::Erax,
        SectionTag::Dim,
        SectionTag::Udta,
        SectionTag::Ugrd,
        SectionTag::Mtxm,
        SectionTag::Sqm,
        SectionTag::Oilm,
        SectionTag::Regm,
        SectionTag::Unit,
        SectionTag::Sign,
        SectionTag::Alow,
    ];

    /// The four bytes written in the file, space padded.
    pub const fn as_bytes(self) -> &'static [u8; 4] {
        match self {
            Self::Type => b"TYPE",
            Self::Ver => b"VER ",
            Self::Desc => b"DESC",
            Self::Ownr => b"OWNR",
            Self::Side => b"SIDE",
            Self::Aipl => b"AIPL",
            Self::Sgld => b"SGLD",
            Self::Slbr => b"SLBR",
            Self::Soil => b"SOIL",
            Self::Era => b"ERA ",
            Self::Erax => b"ERAX",
            Self::Dim => b"DIM ",
            Self::Udta => b"UDTA",
            Self::Ugrd => b"UGRD",
            Self::Mtxm => b"MTXM",
            Self::Sqm => b"SQM ",
            Self::Oilm => b"OILM",
            Self::Regm => b"REGM",
            Self::Unit => b"UNIT",
            Self::Sign => b"SIGN",
            Self::Alow => b"ALOW",
        }
    }

    pub fn from_bytes(bytes: &[u8; 4]) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.as_bytes() == bytes)
    }

    /// Tag text without the trailing padding
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "TYPE",
            Self::Ver => "VER",
            Self::Desc => "DESC",
            Self::Ownr => "OWNR",
            Self::Side => "SIDE",
            Self::Aipl => "AIPL",
            Self::Sgld => "SGLD",
            Self::Slbr => "SLBR",
            Self::Soil => "SOIL",
            Self::Era => "ERA",
            Self::Erax => "ERAX",
            Self::Dim => "DIM",
            Self::Udta => "UDTA",
            Self::Ugrd => "UGRD",
            Self::Mtxm => "MTXM",
            Self::Sqm => "SQM",
            Self::Oilm => "OILM",
            Self::Regm => "REGM",
            Self::Unit => "UNIT",
            Self::Sign => "SIGN",
            Self::Alow => "ALOW",
        }
    }

    /// Sections whose size is derived from the map dimensions.
    pub fn is_dimension_sized(self) -> bool {
        matches!(self, Self::Mtxm | Self::Sqm | Self::Oilm | Self::Regm)
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a raw tag for error messages.
pub(crate) fn describe_raw_tag(bytes: &[u8; 4]) -> String {
    String::from_utf8_lossy(bytes).trim_end().to_string()
}
