//! Tournament runner entry point.
mod config;
mod narrate;

use anyhow::{bail, Context, Result};
use battle_core::{Combatant, NoopSink};
use bracket_core::{run_tournament_with_config, Phase, Tournament, TournamentOutcome};
use clap::Parser;
use config::ArenaConfig;
use narrate::Narrator;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roster_core::RosterStore;
use serde::Serialize;
use std::path::PathBuf;

/// Run a single-elimination tournament between roster combatants
#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Run a single-elimination tournament", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./arena.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Roster file or directory of roster files
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Number of entrants drawn at random from the roster
    #[arg(short = 'n', long)]
    entrants: Option<usize>,

    /// Explicit entrant ids (comma separated); overrides --entrants
    #[arg(long, value_delimiter = ',')]
    ids: Vec<u32>,

    /// RNG seed, for replaying a tournament
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the full result as JSON instead of narrating
    #[arg(long)]
    json: bool,

    /// Only narrate match results
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    #[serde(flatten)]
    outcome: &'a TournamentOutcome,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ArenaConfig::load(cli.config.as_deref())?;
    let seed = cli
        .seed
        .or(config.tournament.seed)
        .unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let roster_path = cli
        .roster
        .clone()
        .unwrap_or_else(|| config.tournament.roster.clone());
    let store = RosterStore::load(&roster_path)
        .with_context(|| format!("loading roster '{}'", roster_path.display()))?;
    if store.is_empty() {
        bail!("roster '{}' has no combatants", roster_path.display());
    }

    let entrants = pick_entrants(&store, &cli, &config, &mut rng)?;
    tracing::info!("Seed {}, {} entrants", seed, entrants.len());

    if cli.json {
        let outcome =
            run_tournament_with_config(entrants, &mut rng, &mut NoopSink, &config.battle)?;
        let report = Report {
            seed,
            outcome: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Seed: {}", seed);
    let mut narrator = Narrator::new(std::io::stdout().lock(), cli.quiet);
    let mut tournament = Tournament::with_config(entrants, config.battle.clone());
    loop {
        match tournament.step(&mut rng, &mut narrator)? {
            Phase::Resolving(index) => {
                if index == 0 {
                    if let Some(tier) = tournament.tiers().first() {
                        narrator.bracket(tier);
                    }
                }
                narrator.round(index);
            }
            Phase::Complete => break,
            Phase::Building | Phase::Advancing(_) => {}
        }

        if let Some(err) = narrator.take_error() {
            if err.kind() == std::io::ErrorKind::BrokenPipe {
                tracing::debug!("Output closed, stopping early");
                return Ok(());
            }
            return Err(err).context("writing narration");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn pick_entrants(
    store: &RosterStore,
    cli: &Cli,
    config: &ArenaConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Combatant>> {
    if !cli.ids.is_empty() {
        return store.select(&cli.ids).context("selecting entrants by id");
    }

    let count = cli.entrants.unwrap_or(config.tournament.entrants);
    if count == 0 {
        bail!("a tournament needs at least one entrant");
    }
    store
        .sample(count, rng)
        .with_context(|| format!("drawing {} entrants", count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RosterStore {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/roster.toml");
        RosterStore::load(&path).unwrap()
    }

    #[test]
    fn test_bundled_roster_loads() {
        let store = store();
        assert_eq!(store.len(), 16);
    }

    #[test]
    fn test_pick_by_ids() {
        let cli = Cli::parse_from(["arena", "--ids", "25,6,1"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let entrants = pick_entrants(&store(), &cli, &ArenaConfig::default(), &mut rng).unwrap();
        let ids: Vec<u32> = entrants.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![25, 6, 1]);
    }

    #[test]
    fn test_pick_unknown_id_fails() {
        let cli = Cli::parse_from(["arena", "--ids", "9999"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(pick_entrants(&store(), &cli, &ArenaConfig::default(), &mut rng).is_err());
    }

    #[test]
    fn test_pick_random_count() {
        let cli = Cli::parse_from(["arena", "-n", "8"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let entrants = pick_entrants(&store(), &cli, &ArenaConfig::default(), &mut rng).unwrap();
        assert_eq!(entrants.len(), 8);
    }

    #[test]
    fn test_pick_too_many_fails() {
        let cli = Cli::parse_from(["arena", "-n", "17"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(pick_entrants(&store(), &cli, &ArenaConfig::default(), &mut rng).is_err());
    }

    #[test]
    fn test_bundled_tournament_runs() {
        let store = store();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let entrants = store.sample(16, &mut rng).unwrap();
        let outcome =
            run_tournament_with_config(entrants, &mut rng, &mut NoopSink, &Default::default())
                .unwrap();
        assert_eq!(outcome.rounds(), 4);

        let report = Report {
            seed: 2024,
            outcome: &outcome,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], 2024);
        assert_eq!(json["champion"]["id"], outcome.champion.id);
        assert_eq!(json["tiers"].as_array().map(Vec::len), Some(4));
    }
}
