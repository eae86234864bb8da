//! Map entities: placed units, player slots and tile grids

pub mod classifier;
pub mod player;
pub mod tile_grid;
pub mod unit;

pub use classifier::{classify, UnitFlags};
pub use player::{PlayerSlot, PlayerType, ALLOWED_PLAYER_TYPES};
pub use tile_grid::TileGrid;
pub use unit::Unit;
