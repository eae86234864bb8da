//! # war2pud
//!
//! A pure Rust library for reading Warcraft II map files (`.pud`).
//!
//! ## Features
//!
//! - Lazy, forward-only section stream over any `Read` source
//! - Validation of versions, player types, terrains and map dimensions
//! - Unit classification (heroes, peasants, buildings, specials, gold mines)
//! - Game lookup tables loaded from plain text databases
//! - Parallel decoding of map collections
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use war2pud::{GameDatabase, PudReader};
//!
//! let database = GameDatabase::load("data")?;
//! let map = PudReader::from_file("map.pud")?.read(&database)?;
//!
//! println!("{} ({}x{})", map.description, map.width(), map.height());
//! for unit in &map.units {
//!     println!("{unit}");
//! }
//! # Ok::<(), war2pud::PudError>(())
//! ```
//!
//! ## Architecture
//!
//! - `GameDatabase` - Read-only lookup tables shared by all decoders
//! - `SectionStream` - Decodes one section at a time, owning its dimension context
//! - `PudDocument` - The folded map

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod objects;
pub mod summary_info;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{PudError, Result};
pub use types::{FixedText, MapDimensions, MapId, PudVersion};

// Re-export entity types
pub use entities::{classify, PlayerSlot, PlayerType, TileGrid, Unit, UnitFlags};

// Re-export table types
pub use tables::{GameDatabase, LookupTable, TableEntry};

// Re-export document
pub use document::PudDocument;
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use summary_info::MapSummary;

// Re-export I/O types
pub use io::pud::{
    read_batch, PudReader, PudReaderConfiguration, Section, SectionData, SectionStream,
    SectionTag,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
