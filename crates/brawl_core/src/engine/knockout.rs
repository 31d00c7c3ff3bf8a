//! Per-combatant knockout notification plumbing.
//!
//! Every spawned combatant carries one notifier bound to its (team, slot).
//! The notifier fires at most once for the combatant's lifetime; the combat
//! subsystem that decides the defeat is external to this crate.

use crate::models::combatant::TeamSide;

/// The event forwarded to the orchestrator when a combatant goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnockoutEvent {
    pub team: TeamSide,
    pub slot: usize,
}

#[derive(Debug, Clone)]
pub struct KnockoutNotifier {
    team: TeamSide,
    slot: usize,
    fired: bool,
}

impl KnockoutNotifier {
    pub fn new(team: TeamSide, slot: usize) -> Self {
        Self {
            team,
            slot,
            fired: false,
        }
    }

    /// Produce the knockout event, exactly once. Subsequent calls return
    /// `None` so double-defeat conditions cannot double-report.
    pub fn fire(&mut self) -> Option<KnockoutEvent> {
        if self.fired {
            return None;
        }
        self.fired = true;
        Some(KnockoutEvent {
            team: self.team,
            slot: self.slot,
        })
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
