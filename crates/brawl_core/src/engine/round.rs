//! Round lifecycle states and the winner-resolution rule.

use crate::models::combatant::TeamSide;

/// First side to this many round wins takes the match (best of three).
pub const WIN_THRESHOLD: u8 = 2;

/// States of one round, driven by the match director.
///
/// Spawning, Resolving and Cleanup are transient: they begin and complete
/// inside a single director call, so between calls the observable phase is
/// Monitoring or MatchEnded (or Spawning before the first `start_match`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Spawning,
    Monitoring,
    Resolving,
    Cleanup,
    MatchEnded,
}

impl RoundPhase {
    pub fn is_terminal(self) -> bool {
        self == RoundPhase::MatchEnded
    }

    /// Only Monitoring ticks poll the rosters; every other phase ignores
    /// `tick` entirely.
    pub fn accepts_ticks(self) -> bool {
        self == RoundPhase::Monitoring
    }
}

/// Decide whether the round is over and who took it.
///
/// The player roster is checked first, so a simultaneous double wipe scores
/// as an enemy win. That asymmetry is kept deliberately for parity with the
/// shipped behavior; changing the tie semantics is a one-line edit here.
pub fn resolve_round(player_alive: usize, enemy_alive: usize) -> Option<TeamSide> {
    if player_alive == 0 {
        Some(TeamSide::Enemy)
    } else if enemy_alive == 0 {
        Some(TeamSide::Player)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_continues_while_both_sides_stand() {
        assert_eq!(resolve_round(3, 3), None);
        assert_eq!(resolve_round(1, 1), None);
    }

    #[test]
    fn test_enemy_wipe_is_player_win() {
        assert_eq!(resolve_round(2, 0), Some(TeamSide::Player));
    }

    #[test]
    fn test_player_wipe_is_enemy_win() {
        assert_eq!(resolve_round(0, 3), Some(TeamSide::Enemy));
    }

    #[test]
    fn test_double_wipe_scores_for_enemy() {
        // Tie-break law: the player side is checked first.
        assert_eq!(resolve_round(0, 0), Some(TeamSide::Enemy));
    }

    #[test]
    fn test_only_monitoring_accepts_ticks() {
        assert!(RoundPhase::Monitoring.accepts_ticks());
        assert!(!RoundPhase::Spawning.accepts_ticks());
        assert!(!RoundPhase::Resolving.accepts_ticks());
        assert!(!RoundPhase::Cleanup.accepts_ticks());
        assert!(!RoundPhase::MatchEnded.accepts_ticks());
        assert!(RoundPhase::MatchEnded.is_terminal());
    }
}
