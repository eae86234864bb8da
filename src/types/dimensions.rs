//! Map dimensions

use std::fmt;

/// Width and height of a map, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MapDimensions {
    pub width: u16,
    pub height: u16,
}

impl MapDimensions {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of cells in a width*height grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for MapDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
