//! Map summary information.
//!
//! Aggregate counts over a decoded map, as used when cataloguing a collection
//! of maps.

use crate::document::PudDocument;
use crate::entities::UnitFlags;

/// Counts of players and unit categories in one map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapSummary {
    /// Slots that are neither unused nor neutral.
    pub players_count: usize,
    /// All placed units.
    pub units_count: usize,
    pub heroes_count: usize,
    /// Buildings, special buildings included.
    pub buildings_count: usize,
    /// Special buildings and summoned units.
    pub specials_count: usize,
    pub goldmines_count: usize,
    pub peasants_count: usize,
}

impl MapSummary {
    /// Summarize a folded map.
    pub fn from_document(document: &PudDocument) -> Self {
        let mut summary = Self {
            players_count: document.active_players().count(),
            units_count: document.units.len(),
            ..Self::default()
        };

        for unit in &document.units {
            let flags = unit.flags();
            let count = |flag: UnitFlags| usize::from(flags.contains(flag));
            summary.heroes_count += count(UnitFlags::HERO);
            summary.buildings_count += count(UnitFlags::BUILDING);
            summary.specials_count += count(UnitFlags::SPECIAL);
            summary.goldmines_count += count(UnitFlags::GOLDMINE);
            summary.peasants_count += count(UnitFlags::PEASANT);
        }
        summary
    }

    /// Whether any hero is placed.
    pub fn has_heroes(&self) -> bool {
        self.heroes_count > 0
    }

    /// Whether any building is placed.
    pub fn has_buildings(&self) -> bool {
        self.buildings_count > 0
    }

    /// Whether any special unit or building is placed.
    pub fn has_specials(&self) -> bool {
        self.specials_count > 0
    }

    /// True for maps with no gold mine at all, including maps without units.
    pub fn lacks_goldmines(&self) -> bool {
        self.goldmines_count == 0
    }

    /// True for maps with no peasant or peon.
    pub fn lacks_peasants(&self) -> bool {
        self.peasants_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Unit;

    #[test]
    fn test_empty_map() {
        let summary = MapSummary::from_document(&PudDocument::new());
        assert_eq!(summary.units_count, 0);
        assert!(!summary.has_heroes());
        assert!(summary.lacks_goldmines());
        assert!(summary.lacks_peasants());
    }

    #[test]
    fn test_category_counts() {
        let mut doc = PudDocument::new();
        for type_id in [2, 3, 20, 58, 100, 55, 92, 92, 0] {
            doc.units.push(Unit::new(0, 0, type_id, 0, 0));
        }
        let summary = doc.summary();
        assert_eq!(summary.units_count, 9);
        assert_eq!(summary.peasants_count, 2);
        assert_eq!(summary.heroes_count, 1);
        assert_eq!(summary.buildings_count, 2);
        assert_eq!(summary.specials_count, 2);
        assert_eq!(summary.goldmines_count, 2);
        assert!(summary.has_buildings());
        assert!(summary.has_specials());
        assert!(!summary.lacks_goldmines());
    }
}
