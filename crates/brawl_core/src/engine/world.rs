//! Explicit entity ownership for the arena.
//!
//! The world is the single authoritative owner of spawned combatant
//! entities. Spawn and destroy are explicit calls issued by the spawn pass
//! and the cleanup step, never implicit collection.

use std::collections::HashMap;

use crate::engine::knockout::{KnockoutEvent, KnockoutNotifier};
use crate::engine::spawn::SpawnPoint;
use crate::models::combatant::{Capabilities, CombatantKind, EntityId, TeamSide};

/// Weapon charge a hero respawns with.
pub const AMMO_CAPACITY: u8 = 3;

/// Everything needed to instantiate one combatant entity.
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    pub kind: CombatantKind,
    pub team: TeamSide,
    pub slot: usize,
    pub prefab: String,
    pub position: SpawnPoint,
}

#[derive(Debug)]
pub struct ArenaEntity {
    pub id: EntityId,
    pub kind: CombatantKind,
    pub team: TeamSide,
    pub slot: usize,
    pub prefab: String,
    pub position: SpawnPoint,
    pub capabilities: Capabilities,
    /// Stateful weapon charge, force-reset during cleanup for combatants
    /// whose capabilities say so.
    pub ammo: u8,
    /// AI target link; enemies point at the player hero.
    pub target: Option<EntityId>,
    alive: bool,
    notifier: KnockoutNotifier,
}

impl ArenaEntity {
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

#[derive(Debug, Default)]
pub struct ArenaWorld {
    next_id: u64,
    entities: HashMap<EntityId, ArenaEntity>,
}

impl ArenaWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, request: SpawnRequest) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let entity = ArenaEntity {
            id,
            kind: request.kind,
            team: request.team,
            slot: request.slot,
            prefab: request.prefab,
            position: request.position,
            capabilities: Capabilities::for_kind(request.kind),
            ammo: AMMO_CAPACITY,
            target: None,
            alive: true,
            notifier: KnockoutNotifier::new(request.team, request.slot),
        };
        log::trace!(
            "spawned {:?} {:?} slot {} as {:?}",
            entity.team,
            entity.kind,
            entity.slot,
            id
        );
        self.entities.insert(id, entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&ArenaEntity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut ArenaEntity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// A missing entity counts as not alive.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.get(&id).map(|e| e.alive).unwrap_or(false)
    }

    /// Mark an entity dead and fire its knockout notifier. Returns the
    /// notification exactly once; killing an already-dead or missing entity
    /// yields `None`.
    pub fn kill(&mut self, id: EntityId) -> Option<KnockoutEvent> {
        let entity = self.entities.get_mut(&id)?;
        if !entity.alive {
            return None;
        }
        entity.alive = false;
        entity.notifier.fire()
    }

    /// Remove an entity outright. Safe to call for ids that are already
    /// gone, which keeps the spawn pass idempotent.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        self.entities.remove(&id).is_some()
    }

    pub fn reset_ammo(&mut self, id: EntityId) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.ammo = AMMO_CAPACITY;
        }
    }

    pub fn set_target(&mut self, id: EntityId, target: Option<EntityId>) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.target = target;
        }
    }

    pub fn ids_on(&self, team: TeamSide) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .entities
            .values()
            .filter(|e| e.team == team)
            .map(|e| e.id)
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(team: TeamSide, slot: usize) -> SpawnRequest {
        SpawnRequest {
            kind: CombatantKind::Enemy,
            team,
            slot,
            prefab: "bot".to_string(),
            position: SpawnPoint::default(),
        }
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut world = ArenaWorld::new();
        let a = world.spawn(request(TeamSide::Enemy, 0));
        world.destroy(a);
        let b = world.spawn(request(TeamSide::Enemy, 0));
        assert_ne!(a, b);
        assert!(!world.is_alive(a));
        assert!(world.is_alive(b));
    }

    #[test]
    fn test_kill_notifies_exactly_once() {
        let mut world = ArenaWorld::new();
        let id = world.spawn(request(TeamSide::Player, 1));

        let event = world.kill(id).expect("first kill notifies");
        assert_eq!(event.team, TeamSide::Player);
        assert_eq!(event.slot, 1);

        assert!(world.kill(id).is_none());
        assert!(world.contains(id));
        assert!(!world.is_alive(id));
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut world = ArenaWorld::new();
        let id = world.spawn(request(TeamSide::Enemy, 2));
        assert!(world.destroy(id));
        assert!(!world.destroy(id));
        assert!(world.kill(id).is_none());
    }

    #[test]
    fn test_ammo_and_target_updates() {
        let mut world = ArenaWorld::new();
        let hero = world.spawn(SpawnRequest {
            kind: CombatantKind::Hero,
            team: TeamSide::Player,
            slot: 0,
            prefab: "shelly".to_string(),
            position: SpawnPoint::default(),
        });
        let enemy = world.spawn(request(TeamSide::Enemy, 0));

        world.get_mut(hero).unwrap().ammo = 0;
        world.reset_ammo(hero);
        assert_eq!(world.get(hero).unwrap().ammo, AMMO_CAPACITY);

        world.set_target(enemy, Some(hero));
        assert_eq!(world.get(enemy).unwrap().target, Some(hero));
    }
}
