//! Headless brawl runner
//!
//! Drives full best-of-three matches with a scripted random knockout
//! stream, printing per-round and final results. Useful for eyeballing
//! orchestration behavior and for soak-testing seeds.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use brawl_core::{
    MatchDirector, Placement, PlayerSettings, ResultConsumer, RoundPhase, SpawnConfig, TeamSide,
    TICK_DURATION_MS,
};

#[derive(Parser)]
#[command(name = "brawl_cli")]
#[command(about = "Run headless arena brawl matches", long_about = None)]
struct Cli {
    /// RNG seed for spawn planning and the knockout script
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of matches to simulate
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Spawn config JSON file (defaults to the built-in arena)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Percent chance per tick that some combatant goes down
    #[arg(long, default_value_t = 35)]
    knockout_chance: u8,
}

struct PrintConsumer;

impl ResultConsumer for PrintConsumer {
    fn handle_game_result(&mut self, placement: Placement) {
        let label = match placement {
            Placement::PlayerSide => "player side",
            Placement::EnemySide => "enemy side",
            Placement::NoPlayer => "no player",
        };
        println!("  result handed off: {} (placement {})", label, placement.as_index());
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading spawn config {}", path.display()))?;
            SpawnConfig::from_json(&json).context("parsing spawn config")?
        }
        None => SpawnConfig::default(),
    };

    for i in 0..cli.matches {
        let seed = cli.seed.wrapping_add(i as u64);
        println!("match {} (seed {})", i + 1, seed);
        run_match(config.clone(), seed, cli.knockout_chance)?;
    }
    Ok(())
}

fn run_match(config: SpawnConfig, seed: u64, knockout_chance: u8) -> Result<()> {
    let mut director = MatchDirector::new(config, PlayerSettings::default(), seed)
        .with_result_consumer(Box::new(PrintConsumer));
    director.start_match();

    // Separate stream from the spawn planner's so changing the knockout
    // script never perturbs the spawn plans.
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed_cafe);
    let mut reported_rounds = 0;

    // 4 ticks/sec; a hard ceiling keeps a pathological script from hanging.
    for _ in 0..100_000u32 {
        if director.phase() == RoundPhase::MatchEnded {
            break;
        }
        director.tick(TICK_DURATION_MS);

        if rng.gen_range(0..100) < knockout_chance as u32 {
            let mut living: Vec<_> = director
                .roster(TeamSide::Player)
                .handles()
                .iter()
                .chain(director.roster(TeamSide::Enemy).handles())
                .map(|h| h.entity)
                .collect();
            if !living.is_empty() {
                let pick = living.swap_remove(rng.gen_range(0..living.len()));
                director.apply_knockout(pick);
            }
        }

        let summary = director.summary();
        for round in &summary.rounds[reported_rounds..] {
            let side = match round.winner {
                TeamSide::Player => "player",
                TeamSide::Enemy => "enemy",
            };
            println!(
                "  round {} -> {} ({}-{})",
                round.index + 1,
                side,
                summary.player_wins,
                summary.enemy_wins
            );
        }
        reported_rounds = summary.rounds.len();
    }

    let summary = director.summary();
    match summary.winner {
        Some(winner) => println!(
            "  final: {:?} {}-{} over {} rounds\n",
            winner,
            summary.player_wins,
            summary.enemy_wins,
            summary.rounds.len()
        ),
        None => println!("  match did not finish within the tick ceiling\n"),
    }
    Ok(())
}
