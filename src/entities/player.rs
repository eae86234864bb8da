//! Player slots

use std::fmt;

use crate::io::pud::constants::PLAYER_TYPE_TABLE_LEN;
use crate::tables::race::is_neutral_race;

/// Controller of a player slot, as stored in OWNR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerType {
    PassiveComputer,
    Computer,
    Unused,
    Human,
    RescuePassive,
    RescueActive,
}

/// OWNR byte → player type. Several bytes map to the same controller.
pub const ALLOWED_PLAYER_TYPES: [PlayerType; PLAYER_TYPE_TABLE_LEN] = [
    PlayerType::PassiveComputer,
    PlayerType::Computer,
    PlayerType::PassiveComputer,
    PlayerType::Unused,
    PlayerType::Computer,
    PlayerType::Human,
    PlayerType::RescuePassive,
    PlayerType::RescueActive,
];

impl PlayerType {
    /// Look up an OWNR byte; `None` if it is past the end of the table.
    pub fn from_id(id: u8) -> Option<Self> {
        ALLOWED_PLAYER_TYPES.get(id as usize).copied()
    }

    /// Display name of the controller.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PassiveComputer => "passive computer",
            Self::Computer => "computer",
            Self::Unused => "unused",
            Self::Human => "human",
            Self::RescuePassive => "rescue (passive)",
            Self::RescueActive => "rescue (active)",
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the fixed player slots of a map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerSlot {
    /// Position in the slot array
    pub index: usize,
    /// Raw OWNR byte
    pub type_id: Option<u8>,
    pub player_type: Option<PlayerType>,
    /// Raw SIDE byte
    pub race_id: Option<u8>,
    /// Race name from the race table
    pub race: Option<String>,
    /// Raw AIPL byte
    pub ai_id: Option<u8>,
    /// AI profile name from the AI table
    pub ai_name: Option<String>,
    pub gold: u16,
    pub lumber: u16,
    pub oil: u16,
}

impl PlayerSlot {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Any controller other than a human player counts as AI.
    pub fn is_ai(&self) -> bool {
        matches!(self.player_type, Some(t) if t != PlayerType::Human)
    }

    /// Whether the slot's race is the neutral marker race.
    pub fn is_neutral(&self) -> bool {
        self.race.as_deref().map_or(false, is_neutral_race)
    }

    /// A slot that takes part in the game: not unused and not neutral.
    pub fn is_active(&self) -> bool {
        self.player_type != Some(PlayerType::Unused) && !self.is_neutral()
    }
}
