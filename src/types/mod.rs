//! Small value types shared across the crate

mod dimensions;
mod fixed_text;
mod map_id;
mod version;

pub use dimensions::MapDimensions;
pub use fixed_text::FixedText;
pub use map_id::MapId;
pub use version::PudVersion;
