//! Data tables stored inside a map (UDTA, UGRD)

pub mod unit_data;
pub mod upgrade_data;

pub use unit_data::UnitData;
pub use upgrade_data::UpgradeData;
