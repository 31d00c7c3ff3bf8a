//! External collaborator interfaces.
//!
//! Every collaborator is optional: the orchestrator checks for presence and
//! proceeds without the side effect when a port is not wired. None of these
//! calls may feed back into orchestration state.

use crate::models::combatant::TeamSide;
use crate::models::match_result::Placement;

/// Fire-and-forget audio/visual cues. Delivery failures are invisible to
/// the orchestrator, so implementations should swallow their own errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvCue {
    /// Pre-round highlight of one side's UI panel.
    TeamHighlight { team: TeamSide },
    /// A combatant on `team` went down.
    Knockout { team: TeamSide },
    /// One roster was wiped; the round is being scored.
    RoundOver,
    /// Terminal cue when the match ends.
    MatchEnd { winner: TeamSide },
    /// Looping arena music, started once per match.
    BackgroundMusic,
}

/// Consumer of the final match result (the lobby/meta layer).
pub trait ResultConsumer {
    fn handle_game_result(&mut self, placement: Placement);
}

/// Per-slot UI wiring: control buttons and the round result indicator row.
pub trait SlotPanel {
    fn set_slot_interactable(&mut self, team: TeamSide, slot: usize, interactable: bool);
    fn tint_round_indicator(&mut self, round: usize, winner: TeamSide);
}

/// Audio/visual cue backend.
pub trait CueSink {
    fn play(&mut self, cue: AvCue);
}

/// Shared environmental hazard system, reset to its initial state at every
/// spawn pass.
pub trait HazardSpawner {
    fn reset(&mut self);
}
