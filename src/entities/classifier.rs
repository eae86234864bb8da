//! Unit type classification
//!
//! Maps a raw unit-type id to a set of [`UnitFlags`]. The membership sets are
//! static and the full 256-entry table is computed at compile time, together
//! with the check that the only overlapping categories are building and
//! special (a special building is still a building).

use bitflags::bitflags;

bitflags! {
    /// Semantic categories of a unit type. Not mutually exclusive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UnitFlags: u8 {
        const HERO = 1;
        const PEASANT = 2;
        const BUILDING = 4;
        const SPECIAL = 8;
        const GOLDMINE = 16;
    }
}

/// Worker units.
pub const PEASANT_UNITS: &[u8] = &[2, 3];

/// Named heroes, including the expansion ones.
pub const HERO_UNITS: &[u8] = &[
    20, 21, 22, 23, 24, 25, 35, 44, 45, 46, 47, 49, 50, 51, 52, 53,
];

/// Regular buildings. 92-95 (gold mine, oil patch, start locations) are not buildings.
pub const BUILDING_UNITS: &[u8] = &[
    58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80,
    81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 96, 97, 98, 99,
];

/// Circle of power, dark portal, runestone.
pub const SPECIAL_BUILDING_UNITS: &[u8] = &[100, 101, 102];

pub const SKELETON_UNIT: u8 = 55;
pub const DAEMON_UNIT: u8 = 56;
pub const GOLDMINE_UNIT: u8 = 92;

/// Units summoned by spells; special but not buildings.
pub const SPECIAL_SUMMONED_UNITS: &[u8] = &[SKELETON_UNIT, DAEMON_UNIT];

const GOLDMINE_UNITS: &[u8] = &[GOLDMINE_UNIT];

const fn contains(set: &[u8], id: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == id {
            return true;
        }
        i += 1;
    }
    false
}

const fn disjoint(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    while i < a.len() {
        if contains(b, a[i]) {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    let sets: [&[u8]; 6] = [
        PEASANT_UNITS,
        HERO_UNITS,
        BUILDING_UNITS,
        SPECIAL_BUILDING_UNITS,
        SPECIAL_SUMMONED_UNITS,
        GOLDMINE_UNITS,
    ];
    let mut i = 0;
    while i < sets.len() {
        let mut j = i + 1;
        while j < sets.len() {
            assert!(disjoint(sets[i], sets[j]), "unit category tables overlap");
            j += 1;
        }
        i += 1;
    }
};

const fn flags_for(id: u8) -> u8 {
    let mut bits = 0;
    if contains(PEASANT_UNITS, id) {
        bits |= UnitFlags::PEASANT.bits();
    }
    if contains(HERO_UNITS, id) {
        bits |= UnitFlags::HERO.bits();
    }
    if contains(BUILDING_UNITS, id) {
        bits |= UnitFlags::BUILDING.bits();
    }
    if contains(SPECIAL_BUILDING_UNITS, id) {
        bits |= UnitFlags::BUILDING.bits() | UnitFlags::SPECIAL.bits();
    }
    if contains(SPECIAL_SUMMONED_UNITS, id) {
        bits |= UnitFlags::SPECIAL.bits();
    }
    if contains(GOLDMINE_UNITS, id) {
        bits |= UnitFlags::GOLDMINE.bits();
    }
    bits
}

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut id = 0;
    while id < 256 {
        table[id] = flags_for(id as u8);
        id += 1;
    }
    table
}

static CLASSIFICATION: [u8; 256] = build_table();

/// Classify a unit-type id.
#[inline]
pub fn classify(type_id: u8) -> UnitFlags {
    UnitFlags::from_bits_retain(CLASSIFICATION[type_id as usize])
}
