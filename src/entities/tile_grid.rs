//! Width × height grids of 16-bit cells (tiles, movement and action maps)

use crate::types::MapDimensions;

/// A row-major grid of opaque 16-bit cell values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileGrid {
    width: u16,
    height: u16,
    cells: Vec<u16>,
}

impl TileGrid {
    /// Wrap `cells`; `None` unless there is exactly one cell per tile.
    pub fn from_cells(dimensions: MapDimensions, cells: Vec<u16>) -> Option<Self> {
        if cells.len() != dimensions.cell_count() {
            return None;
        }
        Some(Self {
            width: dimensions.width,
            height: dimensions.height,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: u16, y: u16) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// One row of cells
    pub fn row(&self, y: u16) -> Option<&[u16]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.cells.get(start..start + self.width as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_indexing() {
        let grid = TileGrid::from_cells(MapDimensions::new(3, 2), vec![0, 1, 2, 10, 11, 12]).unwrap();
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(2, 0), Some(2));
        assert_eq!(grid.get(1, 1), Some(11));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.row(1), Some(&[10, 11, 12][..]));
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    fn test_cell_count_must_match() {
        assert!(TileGrid::from_cells(MapDimensions::new(2, 2), vec![0; 3]).is_none());
        let empty = TileGrid::from_cells(MapDimensions::new(0, 0), Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.rows().count(), 0);
    }
}
