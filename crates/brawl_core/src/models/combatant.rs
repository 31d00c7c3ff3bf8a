//! Combatant identity: entity ids, team sides and lightweight handles.

use serde::{Deserialize, Serialize};

/// Opaque id for a spawned arena entity. Ids are never reused within a
/// process; a destroyed entity's id simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Which side of the arena a combatant fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Player,
    Enemy,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Player => TeamSide::Enemy,
            TeamSide::Enemy => TeamSide::Player,
        }
    }

    pub fn is_player(self) -> bool {
        self == TeamSide::Player
    }
}

/// Role of a combatant within its team. The hero is the one combatant bound
/// to direct player control; allies and enemies are AI-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatantKind {
    Hero,
    Ally,
    Enemy,
}

/// Capability flags carried per combatant instead of subclassing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub ai_controlled: bool,
    pub grants_currency: bool,
    /// Carries stateful weapon charge that must be force-reset on cleanup.
    pub resettable_weapon: bool,
}

impl Capabilities {
    pub fn for_kind(kind: CombatantKind) -> Self {
        match kind {
            CombatantKind::Hero => Self {
                ai_controlled: false,
                grants_currency: false,
                resettable_weapon: true,
            },
            CombatantKind::Ally => Self {
                ai_controlled: true,
                grants_currency: false,
                resettable_weapon: false,
            },
            CombatantKind::Enemy => Self {
                ai_controlled: true,
                grants_currency: true,
                resettable_weapon: false,
            },
        }
    }
}

/// Lightweight reference to a spawned combatant, owned by a roster.
///
/// The alive flag transitions true -> false exactly once and never back;
/// handles are discarded at round end regardless of state.
#[derive(Debug, Clone)]
pub struct CombatantHandle {
    pub entity: EntityId,
    pub team: TeamSide,
    pub slot: usize,
    pub kind: CombatantKind,
    pub capabilities: Capabilities,
    alive: bool,
}

impl CombatantHandle {
    pub fn new(entity: EntityId, team: TeamSide, slot: usize, kind: CombatantKind) -> Self {
        Self {
            entity,
            team,
            slot,
            kind,
            capabilities: Capabilities::for_kind(kind),
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flip the alive flag. Returns true only on the first transition.
    pub fn mark_knocked_out(&mut self) -> bool {
        let was_alive = self.alive;
        self.alive = false;
        was_alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(TeamSide::Player.opponent(), TeamSide::Enemy);
        assert_eq!(TeamSide::Enemy.opponent().opponent(), TeamSide::Enemy);
    }

    #[test]
    fn test_alive_flag_transitions_once() {
        let mut handle = CombatantHandle::new(EntityId(7), TeamSide::Enemy, 1, CombatantKind::Enemy);
        assert!(handle.is_alive());
        assert!(handle.mark_knocked_out());
        assert!(!handle.is_alive());
        // Second knockout is not a transition
        assert!(!handle.mark_knocked_out());
        assert!(!handle.is_alive());
    }

    #[test]
    fn test_hero_capabilities() {
        let caps = Capabilities::for_kind(CombatantKind::Hero);
        assert!(!caps.ai_controlled);
        assert!(caps.resettable_weapon);

        let caps = Capabilities::for_kind(CombatantKind::Enemy);
        assert!(caps.ai_controlled);
        assert!(caps.grants_currency);
    }
}
