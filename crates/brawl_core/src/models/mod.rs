pub mod combatant;
pub mod match_result;
pub mod roster;

pub use combatant::{Capabilities, CombatantHandle, CombatantKind, EntityId, TeamSide};
pub use match_result::{MatchSummary, Placement, RoundRecord};
pub use roster::TeamRoster;
