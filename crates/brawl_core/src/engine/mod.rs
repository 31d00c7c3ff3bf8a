pub mod director;
pub mod knockout;
pub mod ports;
pub mod round;
pub mod scheduler;
pub mod spawn;
pub mod world;


pub use director::MatchDirector;
pub use knockout::{KnockoutEvent, KnockoutNotifier};
pub use ports::{AvCue, CueSink, HazardSpawner, ResultConsumer, SlotPanel};
pub use round::{resolve_round, RoundPhase, WIN_THRESHOLD};
pub use scheduler::{CueScheduler, TimerId};
pub use spawn::{SpawnConfig, SpawnPlan, SpawnPlanner, SpawnPoint};
pub use world::{ArenaWorld, SpawnRequest, AMMO_CAPACITY};

/// Milliseconds of virtual time per simulation tick (4 ticks/sec).
pub const TICK_DURATION_MS: u64 = 250;

/// Delay before the round-start team highlight cue fires. Long enough that a
/// match reset in the same breath cancels it cleanly.
pub const HIGHLIGHT_DELAY_MS: u64 = 1_500;
