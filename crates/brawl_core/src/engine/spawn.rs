//! Spawn planning: which prefab goes to which slot and spawn point.
//!
//! Planning is pure bookkeeping plus a seeded RNG, split from the side
//! effects of instantiation so the same plan can be replayed in tests. The
//! director executes the plan against the world and wires notifiers, UI
//! signals and targeting.
//!
//! A short prefab pool or spawn point list never fails the pass: the
//! unfillable slot is skipped and the round runs with a degraded roster.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::engine::world::SpawnRequest;
use crate::error::ConfigError;
use crate::models::combatant::{CombatantKind, TeamSide};
use crate::settings::PlayerSettings;

/// Arena position a combatant appears at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

fn default_ally_count() -> usize {
    2
}

fn default_enemy_count() -> usize {
    3
}

/// Prefab pools and spawn geometry for one arena.
///
/// Player-side spawn points are shared between the hero (always point 0)
/// and the allies (points 1..).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub player_prefabs: Vec<String>,
    pub ally_prefabs: Vec<String>,
    pub enemy_prefabs: Vec<String>,
    pub player_spawn_points: Vec<SpawnPoint>,
    pub enemy_spawn_points: Vec<SpawnPoint>,
    #[serde(default = "default_ally_count")]
    pub ally_count: usize,
    #[serde(default = "default_enemy_count")]
    pub enemy_count: usize,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            player_prefabs: vec![
                "shelly".to_string(),
                "colt".to_string(),
                "bull".to_string(),
            ],
            ally_prefabs: vec!["bot_nita".to_string(), "bot_jessie".to_string()],
            enemy_prefabs: vec![
                "bot_shelly".to_string(),
                "bot_colt".to_string(),
                "bot_bull".to_string(),
            ],
            player_spawn_points: vec![
                SpawnPoint { x: -8.0, y: 0.0 },
                SpawnPoint { x: -8.0, y: 3.0 },
                SpawnPoint { x: -8.0, y: -3.0 },
            ],
            enemy_spawn_points: vec![
                SpawnPoint { x: 8.0, y: 0.0 },
                SpawnPoint { x: 8.0, y: 3.0 },
                SpawnPoint { x: 8.0, y: -3.0 },
            ],
            ally_count: default_ally_count(),
            enemy_count: default_enemy_count(),
        }
    }
}

impl SpawnConfig {
    /// Parse and validate a config. Validation is strict at load time even
    /// though the planner itself degrades gracefully at spawn time.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_prefabs.is_empty() {
            return Err(ConfigError::NoPlayerPrefabs);
        }
        if self.player_spawn_points.is_empty() {
            return Err(ConfigError::NoPlayerSpawnPoints);
        }
        if self.enemy_spawn_points.is_empty() {
            return Err(ConfigError::NoEnemySpawnPoints);
        }
        Ok(())
    }
}

/// One planned spawn pass: every combatant that will be instantiated.
#[derive(Debug, Clone)]
pub struct SpawnPlan {
    pub combatants: Vec<SpawnRequest>,
}

impl SpawnPlan {
    pub fn count_on(&self, team: TeamSide) -> usize {
        self.combatants.iter().filter(|c| c.team == team).count()
    }
}

/// Chooses prefabs and spawn points per slot, deterministically per seed.
#[derive(Debug)]
pub struct SpawnPlanner {
    config: SpawnConfig,
    rng: ChaCha8Rng,
}

impl SpawnPlanner {
    pub fn new(config: SpawnConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Lay out one full spawn pass: the hero at the primary player point,
    /// allies on the remaining player points, enemies on the enemy points.
    /// Ally and enemy prefabs are drawn uniformly from their pools.
    pub fn plan(&mut self, settings: &PlayerSettings) -> SpawnPlan {
        let mut combatants = Vec::new();

        match (
            self.config.player_prefabs.is_empty(),
            self.config.player_spawn_points.first(),
        ) {
            (false, Some(&position)) => {
                let index = settings
                    .selected_character
                    .min(self.config.player_prefabs.len() - 1);
                combatants.push(SpawnRequest {
                    kind: CombatantKind::Hero,
                    team: TeamSide::Player,
                    slot: 0,
                    prefab: self.config.player_prefabs[index].clone(),
                    position,
                });
            }
            _ => {
                log::warn!("no player prefab or primary spawn point; hero slot left empty");
            }
        }

        for i in 0..self.config.ally_count {
            let slot = i + 1;
            if self.config.ally_prefabs.is_empty() {
                log::warn!("ally prefab pool empty; skipping ally slot {}", slot);
                continue;
            }
            let Some(&position) = self.config.player_spawn_points.get(slot) else {
                log::warn!("no spawn point for ally slot {}; skipping", slot);
                continue;
            };
            let pick = self.rng.gen_range(0..self.config.ally_prefabs.len());
            combatants.push(SpawnRequest {
                kind: CombatantKind::Ally,
                team: TeamSide::Player,
                slot,
                prefab: self.config.ally_prefabs[pick].clone(),
                position,
            });
        }

        for slot in 0..self.config.enemy_count {
            if self.config.enemy_prefabs.is_empty() {
                log::warn!("enemy prefab pool empty; skipping enemy slot {}", slot);
                continue;
            }
            let Some(&position) = self.config.enemy_spawn_points.get(slot) else {
                log::warn!("no spawn point for enemy slot {}; skipping", slot);
                continue;
            };
            let pick = self.rng.gen_range(0..self.config.enemy_prefabs.len());
            combatants.push(SpawnRequest {
                kind: CombatantKind::Enemy,
                team: TeamSide::Enemy,
                slot,
                prefab: self.config.enemy_prefabs[pick].clone(),
                position,
            });
        }

        log::debug!(
            "planned spawn pass: {} player side, {} enemy side",
            combatants
                .iter()
                .filter(|c| c.team == TeamSide::Player)
                .count(),
            combatants
                .iter()
                .filter(|c| c.team == TeamSide::Enemy)
                .count()
        );

        SpawnPlan { combatants }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_fills_every_slot() {
        let mut planner = SpawnPlanner::new(SpawnConfig::default(), 42);
        let plan = planner.plan(&PlayerSettings::default());

        assert_eq!(plan.count_on(TeamSide::Player), 3); // hero + 2 allies
        assert_eq!(plan.count_on(TeamSide::Enemy), 3);

        let hero = &plan.combatants[0];
        assert_eq!(hero.kind, CombatantKind::Hero);
        assert_eq!(hero.slot, 0);
        assert_eq!(hero.prefab, "shelly");
    }

    #[test]
    fn test_same_seed_same_plan() {
        let settings = PlayerSettings::default();
        let mut a = SpawnPlanner::new(SpawnConfig::default(), 7);
        let mut b = SpawnPlanner::new(SpawnConfig::default(), 7);

        let plan_a = a.plan(&settings);
        let plan_b = b.plan(&settings);
        let prefabs_a: Vec<&str> = plan_a.combatants.iter().map(|c| c.prefab.as_str()).collect();
        let prefabs_b: Vec<&str> = plan_b.combatants.iter().map(|c| c.prefab.as_str()).collect();
        assert_eq!(prefabs_a, prefabs_b);
    }

    #[test]
    fn test_selected_character_is_clamped() {
        let settings = PlayerSettings {
            selected_character: 99,
            ..Default::default()
        };
        let mut planner = SpawnPlanner::new(SpawnConfig::default(), 0);
        let plan = planner.plan(&settings);
        assert_eq!(plan.combatants[0].prefab, "bull"); // last in the pool
    }

    #[test]
    fn test_empty_ally_pool_degrades() {
        let config = SpawnConfig {
            ally_prefabs: Vec::new(),
            ..Default::default()
        };
        let mut planner = SpawnPlanner::new(config, 0);
        let plan = planner.plan(&PlayerSettings::default());
        // Hero still spawns, allies skipped, enemies unaffected
        assert_eq!(plan.count_on(TeamSide::Player), 1);
        assert_eq!(plan.count_on(TeamSide::Enemy), 3);
    }

    #[test]
    fn test_short_spawn_point_list_skips_slot() {
        let config = SpawnConfig {
            enemy_spawn_points: vec![SpawnPoint { x: 8.0, y: 0.0 }],
            ..Default::default()
        };
        let mut planner = SpawnPlanner::new(config, 0);
        let plan = planner.plan(&PlayerSettings::default());
        assert_eq!(plan.count_on(TeamSide::Enemy), 1);
    }

    #[test]
    fn test_from_json_rejects_unusable_config() {
        let err = SpawnConfig::from_json(r#"{"player_prefabs": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoPlayerPrefabs));

        let config = SpawnConfig::from_json(r#"{"ally_count": 1}"#).unwrap();
        assert_eq!(config.ally_count, 1);
        assert_eq!(config.enemy_count, 3);
    }
}
