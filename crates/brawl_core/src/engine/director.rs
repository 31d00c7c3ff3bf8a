//! Match director: owns both rosters, the round counter and the entity
//! world, and drives the round lifecycle until one side reaches the win
//! threshold.
//!
//! Control flow per round: a spawn pass populates both rosters, every
//! Monitoring tick prunes dead handles and checks the win condition, and a
//! wiped roster resolves the round. Cleanup destroys every combatant from
//! the round (alive or not) before the next spawn pass begins, so no entity
//! from round N is ever present during round N+1.
//!
//! Spawning, Resolving and Cleanup run to completion inside a single call;
//! `tick` only does work in the Monitoring phase.

use crate::engine::knockout::KnockoutEvent;
use crate::engine::ports::{AvCue, CueSink, HazardSpawner, ResultConsumer, SlotPanel};
use crate::engine::round::{resolve_round, RoundPhase, WIN_THRESHOLD};
use crate::engine::scheduler::CueScheduler;
use crate::engine::spawn::{SpawnConfig, SpawnPlanner};
use crate::engine::world::ArenaWorld;
use crate::engine::HIGHLIGHT_DELAY_MS;
use crate::models::combatant::{CombatantHandle, CombatantKind, EntityId, TeamSide};
use crate::models::match_result::{MatchSummary, Placement, RoundRecord};
use crate::models::roster::TeamRoster;
use crate::settings::PlayerSettings;

pub struct MatchDirector {
    world: ArenaWorld,
    player_roster: TeamRoster,
    enemy_roster: TeamRoster,
    planner: SpawnPlanner,
    settings: PlayerSettings,
    scheduler: CueScheduler,
    phase: RoundPhase,
    round_index: usize,
    clock_ms: u64,
    rounds: Vec<RoundRecord>,
    match_winner: Option<TeamSide>,
    restart_requested: bool,
    result_consumer: Option<Box<dyn ResultConsumer>>,
    slot_panel: Option<Box<dyn SlotPanel>>,
    cue_sink: Option<Box<dyn CueSink>>,
    hazards: Option<Box<dyn HazardSpawner>>,
}

impl MatchDirector {
    pub fn new(config: SpawnConfig, settings: PlayerSettings, seed: u64) -> Self {
        Self {
            world: ArenaWorld::new(),
            player_roster: TeamRoster::new(TeamSide::Player),
            enemy_roster: TeamRoster::new(TeamSide::Enemy),
            planner: SpawnPlanner::new(config, seed),
            settings,
            scheduler: CueScheduler::new(),
            phase: RoundPhase::Spawning,
            round_index: 0,
            clock_ms: 0,
            rounds: Vec::new(),
            match_winner: None,
            restart_requested: false,
            result_consumer: None,
            slot_panel: None,
            cue_sink: None,
            hazards: None,
        }
    }

    pub fn with_result_consumer(mut self, consumer: Box<dyn ResultConsumer>) -> Self {
        self.result_consumer = Some(consumer);
        self
    }

    pub fn with_slot_panel(mut self, panel: Box<dyn SlotPanel>) -> Self {
        self.slot_panel = Some(panel);
        self
    }

    pub fn with_cue_sink(mut self, sink: Box<dyn CueSink>) -> Self {
        self.cue_sink = Some(sink);
        self
    }

    pub fn with_hazard_spawner(mut self, hazards: Box<dyn HazardSpawner>) -> Self {
        self.hazards = Some(hazards);
        self
    }

    // ---- public orchestration surface ----

    /// Begin a fresh match: win counts and round index zeroed, any leftover
    /// entities and timers cleared, then the first spawn pass.
    pub fn start_match(&mut self) {
        self.scheduler.clear();
        self.despawn_all();
        self.player_roster.reset_wins();
        self.enemy_roster.reset_wins();
        self.round_index = 0;
        self.clock_ms = 0;
        self.rounds.clear();
        self.match_winner = None;
        self.restart_requested = false;
        log::info!("match starting (first to {} wins)", WIN_THRESHOLD);
        self.emit_cue(AvCue::BackgroundMusic);
        self.spawn_round();
    }

    /// One simulation tick of `dt_ms` virtual milliseconds. A no-op outside
    /// the Monitoring phase.
    pub fn tick(&mut self, dt_ms: u64) {
        if !self.phase.accepts_ticks() {
            return;
        }
        self.clock_ms += dt_ms;
        for cue in self.scheduler.poll(self.clock_ms) {
            self.emit_cue(cue);
        }
        self.prune_and_evaluate();
    }

    /// Knockout notification for (team, slot), normally forwarded by the
    /// combatant's own notifier. Prunes both rosters and re-evaluates the
    /// win condition synchronously; never deferred to the next tick.
    ///
    /// The notification never kills anything itself; the world's alive flag
    /// is authoritative. A notification for an unoccupied slot, or for a
    /// slot whose current occupant is still alive (a stale report from a
    /// previous round), is a no-op.
    pub fn on_knocked_out(&mut self, team: TeamSide, slot: usize) {
        if self.phase != RoundPhase::Monitoring {
            log::debug!(
                "knockout notification for {:?} slot {} outside Monitoring; ignoring",
                team,
                slot
            );
            return;
        }
        let Some(entity) = self.roster(team).find_by_slot(slot).map(|h| h.entity) else {
            log::debug!("knockout for unoccupied {:?} slot {}; ignoring", team, slot);
            return;
        };
        if self.world.is_alive(entity) {
            log::debug!("stale knockout for {:?} slot {}; occupant alive", team, slot);
            return;
        }
        self.emit_cue(AvCue::Knockout { team });
        self.prune_and_evaluate();
    }

    /// Mark an entity dead without routing the notification. Models the
    /// combat subsystem destroying combatants (possibly several in one
    /// batch) before their notifications are delivered.
    pub fn kill_entity(&mut self, id: EntityId) -> Option<KnockoutEvent> {
        self.world.kill(id)
    }

    /// Kill an entity and deliver its knockout notification in one step.
    pub fn apply_knockout(&mut self, id: EntityId) {
        if let Some(event) = self.world.kill(id) {
            self.on_knocked_out(event.team, event.slot);
        }
    }

    /// Cancel the match: in-flight deferred cues and both rosters are
    /// cleared atomically before any new spawn pass is accepted. No result
    /// is reported.
    pub fn abort(&mut self) {
        self.scheduler.clear();
        self.despawn_all();
        self.phase = RoundPhase::MatchEnded;
        log::debug!("match aborted");
    }

    // ---- accessors ----

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn wins(&self, side: TeamSide) -> u8 {
        self.roster(side).wins()
    }

    pub fn alive_count(&self, side: TeamSide) -> usize {
        self.roster(side).alive_count()
    }

    pub fn roster(&self, side: TeamSide) -> &TeamRoster {
        match side {
            TeamSide::Player => &self.player_roster,
            TeamSide::Enemy => &self.enemy_roster,
        }
    }

    pub fn world(&self) -> &ArenaWorld {
        &self.world
    }

    pub fn pending_cues(&self) -> usize {
        self.scheduler.pending()
    }

    /// True when the match ended with no result consumer wired; the host
    /// should restart the current scene.
    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }

    pub fn match_winner(&self) -> Option<TeamSide> {
        self.match_winner
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            rounds: self.rounds.clone(),
            player_wins: self.player_roster.wins(),
            enemy_wins: self.enemy_roster.wins(),
            winner: self.match_winner,
        }
    }

    // ---- round lifecycle ----

    fn roster_mut(&mut self, side: TeamSide) -> &mut TeamRoster {
        match side {
            TeamSide::Player => &mut self.player_roster,
            TeamSide::Enemy => &mut self.enemy_roster,
        }
    }

    fn spawn_round(&mut self) {
        self.phase = RoundPhase::Spawning;
        log::debug!("spawn pass for round {}", self.round_index);

        // Idempotent: destroys any previously tracked combatants first.
        self.despawn_all();
        if let Some(hazards) = self.hazards.as_mut() {
            hazards.reset();
        }

        let plan = self.planner.plan(&self.settings);
        let mut hero = None;
        for request in plan.combatants {
            let (team, slot, kind) = (request.team, request.slot, request.kind);
            let id = self.world.spawn(request);
            if kind == CombatantKind::Hero {
                hero = Some(id);
            }
            self.roster_mut(team)
                .push(CombatantHandle::new(id, team, slot, kind));
            if let Some(panel) = self.slot_panel.as_mut() {
                panel.set_slot_interactable(team, slot, true);
            }
        }

        // Re-link enemy targeting to the freshly spawned hero.
        for id in self.world.ids_on(TeamSide::Enemy) {
            self.world.set_target(id, hero);
        }

        self.scheduler.schedule(
            self.clock_ms + HIGHLIGHT_DELAY_MS,
            AvCue::TeamHighlight {
                team: TeamSide::Player,
            },
        );

        self.phase = RoundPhase::Monitoring;
        log::debug!(
            "round {} monitoring: {} vs {}",
            self.round_index,
            self.player_roster.alive_count(),
            self.enemy_roster.alive_count()
        );
    }

    fn prune_and_evaluate(&mut self) {
        let removed_player = self.player_roster.prune(&self.world);
        let removed_enemy = self.enemy_roster.prune(&self.world);
        if let Some(panel) = self.slot_panel.as_mut() {
            for handle in removed_player.iter().chain(removed_enemy.iter()) {
                panel.set_slot_interactable(handle.team, handle.slot, false);
            }
        }

        let player_alive = self.player_roster.alive_count();
        let enemy_alive = self.enemy_roster.alive_count();
        if let Some(winner) = resolve_round(player_alive, enemy_alive) {
            self.resolve(winner);
        }
    }

    fn resolve(&mut self, winner: TeamSide) {
        self.phase = RoundPhase::Resolving;
        let round = self.round_index;
        self.roster_mut(winner).record_win();
        self.rounds.push(RoundRecord {
            index: round,
            winner,
        });
        self.round_index += 1;
        if let Some(panel) = self.slot_panel.as_mut() {
            panel.tint_round_indicator(round, winner);
        }
        log::info!(
            "round {} won by {:?} ({}-{})",
            round,
            winner,
            self.player_roster.wins(),
            self.enemy_roster.wins()
        );
        self.emit_cue(AvCue::RoundOver);
        self.cleanup();
    }

    fn cleanup(&mut self) {
        self.phase = RoundPhase::Cleanup;
        // Round-scoped deferred cues are stale once the round resolves.
        self.scheduler.clear();

        // Force-reset stateful weapons on surviving player-side combatants
        // before their entities go away.
        for handle in self.player_roster.handles() {
            if handle.is_alive() && handle.capabilities.resettable_weapon {
                self.world.reset_ammo(handle.entity);
            }
        }
        self.despawn_all();
        debug_assert!(self.world.is_empty());

        if self.player_roster.wins() >= WIN_THRESHOLD {
            self.end_match(TeamSide::Player);
        } else if self.enemy_roster.wins() >= WIN_THRESHOLD {
            self.end_match(TeamSide::Enemy);
        } else {
            self.spawn_round();
        }
    }

    fn end_match(&mut self, winner: TeamSide) {
        self.phase = RoundPhase::MatchEnded;
        self.match_winner = Some(winner);
        self.scheduler.clear();
        self.emit_cue(AvCue::MatchEnd { winner });

        let placement = Placement::from(winner);
        if let Some(consumer) = self.result_consumer.as_mut() {
            consumer.handle_game_result(placement);
        } else {
            // Missing consumer is not an error: fall back to restarting the
            // scene so the session keeps moving.
            log::warn!("no result consumer registered; requesting scene restart");
            self.restart_requested = true;
        }
        log::info!(
            "match ended: {:?} wins (placement {})",
            winner,
            placement.as_index()
        );
    }

    /// Destroy every tracked combatant and empty both rosters. Safe to call
    /// when the rosters are already empty.
    fn despawn_all(&mut self) {
        for handle in self
            .player_roster
            .drain()
            .into_iter()
            .chain(self.enemy_roster.drain())
        {
            if handle.capabilities.resettable_weapon {
                self.world.reset_ammo(handle.entity);
            }
            self.world.destroy(handle.entity);
        }
    }

    fn emit_cue(&mut self, cue: AvCue) {
        let enabled = match cue {
            AvCue::BackgroundMusic => self.settings.music_on,
            AvCue::Knockout { .. } | AvCue::RoundOver | AvCue::MatchEnd { .. } => {
                self.settings.sounds_on
            }
            AvCue::TeamHighlight { .. } => true,
        };
        if !enabled {
            return;
        }
        if let Some(sink) = self.cue_sink.as_mut() {
            sink.play(cue);
        }
    }
}
