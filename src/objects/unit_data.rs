//! Per-unit-type data from the UDTA section.
//!
//! Each field is a parallel array indexed by unit-type id. The arrays are kept
//! exactly as decoded; the accessors only bounds-check.

/// Unit type overrides stored in a map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnitData {
    /// Non-zero when the game should ignore this section and use its defaults
    pub use_default: u16,
    pub first_construction_frame: Vec<u8>,
    pub second_construction_frame: Vec<u8>,
    pub general_unit_gfx: Vec<u16>,
    pub summer_unit_gfx: Vec<u16>,
    pub winter_unit_gfx: Vec<u16>,
    pub wasteland_unit_gfx: Vec<u16>,
    pub sight_range: Vec<u32>,
    pub hit_points: Vec<u16>,
    pub magic: Vec<u8>,
    pub build_time: Vec<u8>,
    pub gold_cost: Vec<u8>,
    pub lumber_cost: Vec<u8>,
    pub oil_cost: Vec<u8>,
    pub unit_size: Vec<u32>,
    pub box_size: Vec<u32>,
    pub attack_range: Vec<u8>,
    pub reaction_range_cpu: Vec<u8>,
    pub reaction_range_human: Vec<u8>,
    pub armor: Vec<u8>,
    pub selectable_by_rect: Vec<u8>,
    pub priority: Vec<u8>,
    pub basic_damage: Vec<u8>,
    pub piercing_damage: Vec<u8>,
    pub weapons_upgradeable: Vec<u8>,
    pub armor_upgradeable: Vec<u8>,
    pub missile_weapon: Vec<u8>,
    pub unit_type: Vec<u8>,
    pub decay_rate: Vec<u8>,
    pub annoy_cpu_factor: Vec<u8>,
    pub mouse_btn_2_action: Vec<u8>,
    pub point_value_for_kill_unit: Vec<u16>,
    pub can_target: Vec<u8>,
    pub flags: Vec<u32>,
}

impl UnitData {
    /// Whether the map asks for the built-in unit data instead of this table.
    pub fn uses_default(&self) -> bool {
        self.use_default != 0
    }

    pub fn hit_points_of(&self, type_id: u8) -> Option<u16> {
        self.hit_points.get(type_id as usize).copied()
    }

    pub fn sight_range_of(&self, type_id: u8) -> Option<u32> {
        self.sight_range.get(type_id as usize).copied()
    }

    pub fn armor_of(&self, type_id: u8) -> Option<u8> {
        self.armor.get(type_id as usize).copied()
    }

    /// Gold, lumber and oil cost
    pub fn cost_of(&self, type_id: u8) -> Option<(u8, u8, u8)> {
        let i = type_id as usize;
        Some((
            *self.gold_cost.get(i)?,
            *self.lumber_cost.get(i)?,
            *self.oil_cost.get(i)?,
        ))
    }

    /// Missile weapon id, resolvable through the missile weapon table
    pub fn missile_weapon_of(&self, type_id: u8) -> Option<u8> {
        self.missile_weapon.get(type_id as usize).copied()
    }
}
