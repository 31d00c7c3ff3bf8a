//! Team roster: the authoritative live set of combatants on one side.
//!
//! Membership is never re-derived by scanning the world; the orchestrator
//! prunes the roster before every win-condition check, so between checks the
//! roster only ever lags the world by the current tick.

use crate::engine::world::ArenaWorld;

use super::combatant::{CombatantHandle, EntityId, TeamSide};

#[derive(Debug)]
pub struct TeamRoster {
    side: TeamSide,
    handles: Vec<CombatantHandle>,
    wins: u8,
}

impl TeamRoster {
    pub fn new(side: TeamSide) -> Self {
        Self {
            side,
            handles: Vec::new(),
            wins: 0,
        }
    }

    pub fn side(&self) -> TeamSide {
        self.side
    }

    pub fn push(&mut self, handle: CombatantHandle) {
        debug_assert_eq!(handle.team, self.side);
        self.handles.push(handle);
    }

    pub fn handles(&self) -> &[CombatantHandle] {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut [CombatantHandle] {
        &mut self.handles
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Alive count after the last prune. With pruning performed before every
    /// check this equals the handle count.
    pub fn alive_count(&self) -> usize {
        self.handles.iter().filter(|h| h.is_alive()).count()
    }

    pub fn contains_slot(&self, slot: usize) -> bool {
        self.handles.iter().any(|h| h.slot == slot)
    }

    pub fn find_by_slot(&self, slot: usize) -> Option<&CombatantHandle> {
        self.handles.iter().find(|h| h.slot == slot)
    }

    pub fn find_by_entity(&self, entity: EntityId) -> Option<&CombatantHandle> {
        self.handles.iter().find(|h| h.entity == entity)
    }

    /// Drop every handle whose backing entity is gone or dead, or whose own
    /// alive flag has been cleared. Returns the removed handles so the caller
    /// can emit slot-occupancy signals. Order of survivors is stable.
    pub fn prune(&mut self, world: &ArenaWorld) -> Vec<CombatantHandle> {
        let mut removed = Vec::new();
        self.handles.retain(|h| {
            if h.is_alive() && world.is_alive(h.entity) {
                true
            } else {
                removed.push(h.clone());
                false
            }
        });
        removed
    }

    /// Drain every handle, alive or not. Used by the cleanup step, which
    /// destroys the backing entities itself.
    pub fn drain(&mut self) -> Vec<CombatantHandle> {
        std::mem::take(&mut self.handles)
    }

    pub fn wins(&self) -> u8 {
        self.wins
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn reset_wins(&mut self) {
        self.wins = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::world::{ArenaWorld, SpawnRequest};
    use crate::models::combatant::CombatantKind;

    fn spawn_one(world: &mut ArenaWorld, side: TeamSide, slot: usize) -> CombatantHandle {
        let id = world.spawn(SpawnRequest {
            kind: CombatantKind::Enemy,
            team: side,
            slot,
            prefab: "bot".to_string(),
            position: Default::default(),
        });
        CombatantHandle::new(id, side, slot, CombatantKind::Enemy)
    }

    #[test]
    fn test_prune_removes_dead_entities() {
        let mut world = ArenaWorld::new();
        let mut roster = TeamRoster::new(TeamSide::Enemy);
        let a = spawn_one(&mut world, TeamSide::Enemy, 0);
        let b = spawn_one(&mut world, TeamSide::Enemy, 1);
        let a_id = a.entity;
        roster.push(a);
        roster.push(b);
        assert_eq!(roster.alive_count(), 2);

        world.kill(a_id);
        let removed = roster.prune(&world);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].slot, 0);
        assert_eq!(roster.alive_count(), 1);
        assert!(roster.contains_slot(1));
        assert!(!roster.contains_slot(0));
    }

    #[test]
    fn test_prune_removes_destroyed_entities() {
        let mut world = ArenaWorld::new();
        let mut roster = TeamRoster::new(TeamSide::Player);
        let a = spawn_one(&mut world, TeamSide::Player, 0);
        let a_id = a.entity;
        roster.push(a);

        world.destroy(a_id);
        let removed = roster.prune(&world);
        assert_eq!(removed.len(), 1);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_wins_survive_drain() {
        let mut world = ArenaWorld::new();
        let mut roster = TeamRoster::new(TeamSide::Player);
        roster.push(spawn_one(&mut world, TeamSide::Player, 0));
        roster.record_win();
        let drained = roster.drain();
        assert_eq!(drained.len(), 1);
        assert!(roster.is_empty());
        assert_eq!(roster.wins(), 1);
        roster.reset_wins();
        assert_eq!(roster.wins(), 0);
    }
}
