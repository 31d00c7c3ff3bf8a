//! Match outcome data structures handed to external consumers.

use serde::{Deserialize, Serialize};

use super::combatant::TeamSide;

/// Final placement reported to the external result consumer.
///
/// The wire values match the brawl result contract: 0 = player side won,
/// 1 = enemy side won. Higher values are reserved for the one-shot
/// elimination variants signalling "no player present".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    PlayerSide,
    EnemySide,
    NoPlayer,
}

impl Placement {
    pub fn as_index(self) -> u8 {
        match self {
            Placement::PlayerSide => 0,
            Placement::EnemySide => 1,
            Placement::NoPlayer => 10,
        }
    }
}

impl From<TeamSide> for Placement {
    fn from(side: TeamSide) -> Self {
        match side {
            TeamSide::Player => Placement::PlayerSide,
            TeamSide::Enemy => Placement::EnemySide,
        }
    }
}

/// One resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub index: usize,
    pub winner: TeamSide,
}

/// Summary of a finished (or in-progress) match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub rounds: Vec<RoundRecord>,
    pub player_wins: u8,
    pub enemy_wins: u8,
    pub winner: Option<TeamSide>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_wire_values() {
        assert_eq!(Placement::PlayerSide.as_index(), 0);
        assert_eq!(Placement::EnemySide.as_index(), 1);
        assert_eq!(Placement::NoPlayer.as_index(), 10);
    }

    #[test]
    fn test_placement_from_side() {
        assert_eq!(Placement::from(TeamSide::Player), Placement::PlayerSide);
        assert_eq!(Placement::from(TeamSide::Enemy), Placement::EnemySide);
    }
}
