//! Upgrade research data from the UGRD section.

/// Upgrade overrides stored in a map, one entry per upgrade-type id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpgradeData {
    /// Non-zero when the game should ignore this section and use its defaults
    pub use_default: u16,
    /// Research time
    pub upgrade_time: Vec<u8>,
    pub gold_cost: Vec<u16>,
    pub lumber_cost: Vec<u16>,
    pub oil_cost: Vec<u16>,
    /// Icon shown for the upgrade
    pub upgrade_icon: Vec<u16>,
    /// Unit group the upgrade applies to
    pub group_applies_to: Vec<u16>,
    /// Bit set of the unit types affected
    pub affect_flags: Vec<u32>,
}

impl UpgradeData {
    /// Whether the map asks for the built-in upgrade data instead of this table.
    pub fn uses_default(&self) -> bool {
        self.use_default != 0
    }

    /// Gold, lumber and oil cost of an upgrade
    pub fn cost_of(&self, upgrade_id: u8) -> Option<(u16, u16, u16)> {
        let i = upgrade_id as usize;
        Some((
            *self.gold_cost.get(i)?,
            *self.lumber_cost.get(i)?,
            *self.oil_cost.get(i)?,
        ))
    }

    /// Research time of an upgrade
    pub fn upgrade_time_of(&self, upgrade_id: u8) -> Option<u8> {
        self.upgrade_time.get(upgrade_id as usize).copied()
    }
}
