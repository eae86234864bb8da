//! PUD format versions

use std::fmt;

/// Format version stored in the VER section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum PudVersion {
    /// Maps without the expansion heroes.
    V17 = 17,
    /// Maps with the expansion heroes.
    V19 = 19,
}

impl PudVersion {
    /// Every version the decoder accepts.
    pub const ALL: [PudVersion; 2] = [PudVersion::V17, PudVersion::V19];

    /// Map a raw VER value to a version, `None` if unsupported.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            17 => Some(Self::V17),
            19 => Some(Self::V19),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether this version can place the expansion heroes.
    pub fn has_new_heroes(self) -> bool {
        self == Self::V19
    }
}

impl fmt::Display for PudVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}
