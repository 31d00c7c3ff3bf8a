//! # brawl_core - Round-Based Arena Match Orchestration Engine
//!
//! This library drives a best-of-three arena brawl between two rosters of
//! combatants: it plans and spawns both teams, monitors liveness every
//! simulation tick, scores each round when one side is wiped out, and ends
//! the match once a side reaches the win threshold.
//!
//! ## Features
//! - 100% deterministic spawn planning (same seed = same rosters)
//! - Explicit entity ownership (no world scans, no implicit teardown)
//! - Optional external collaborators for UI, audio cues and hazards
//! - Headless operation for tests and CLI simulation

pub mod engine;
pub mod error;
pub mod models;
pub mod settings;

// Re-export the orchestration surface
pub use engine::director::MatchDirector;
pub use engine::knockout::{KnockoutEvent, KnockoutNotifier};
pub use engine::ports::{AvCue, CueSink, HazardSpawner, ResultConsumer, SlotPanel};
pub use engine::round::{resolve_round, RoundPhase, WIN_THRESHOLD};
pub use engine::scheduler::{CueScheduler, TimerId};
pub use engine::spawn::{SpawnConfig, SpawnPlan, SpawnPlanner, SpawnPoint};
pub use engine::world::{ArenaWorld, SpawnRequest, AMMO_CAPACITY};
pub use engine::{HIGHLIGHT_DELAY_MS, TICK_DURATION_MS};

// Re-export core data types
pub use error::ConfigError;
pub use models::combatant::{Capabilities, CombatantHandle, CombatantKind, EntityId, TeamSide};
pub use models::match_result::{MatchSummary, Placement, RoundRecord};
pub use models::roster::TeamRoster;
pub use settings::PlayerSettings;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
