use crate::bracket::{build_bracket, pair_entrants};
use crate::tier::Tier;
use crate::BracketError;
use battle_core::{resolve_match_with_config, BattleConfig, Combatant, EventSink};
use rand::Rng;
use serde::Serialize;

/// Where a tournament is in its progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The initial bracket has not been drawn yet
    Building,
    /// Tier `n` is next to be fought
    Resolving(usize),
    /// Tier `n` is resolved; its winners are waiting to be paired
    Advancing(usize),
    /// A champion has been crowned
    Complete,
}

/// Final result of a tournament run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentOutcome {
    pub champion: Combatant,
    /// Every tier, in the order it was fought
    pub tiers: Vec<Tier>,
}

impl TournamentOutcome {
    /// Number of tiers played
    pub fn rounds(&self) -> usize {
        self.tiers.len()
    }
}

/// Single-elimination tournament state machine
///
/// Drive it one transition at a time with [`Tournament::step`], or to the
/// end with [`Tournament::run`]. Matches are resolved sequentially in tier
/// order so the event stream is reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct Tournament {
    roster: Vec<Combatant>,
    config: BattleConfig,
    phase: Phase,
    tiers: Vec<Tier>,
    winners: Vec<Combatant>,
    champion: Option<Combatant>,
}

impl Tournament {
    pub fn new(roster: Vec<Combatant>) -> Self {
        Self::with_config(roster, BattleConfig::default())
    }

    pub fn with_config(roster: Vec<Combatant>, config: BattleConfig) -> Self {
        Tournament {
            roster,
            config,
            phase: Phase::Building,
            tiers: Vec::new(),
            winners: Vec::new(),
            champion: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Tiers drawn so far
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn champion(&self) -> Option<&Combatant> {
        self.champion.as_ref()
    }

    /// Perform one transition and return the new phase
    ///
    /// Calling this on a complete tournament does nothing.
    pub fn step<R, S>(&mut self, rng: &mut R, sink: &mut S) -> Result<Phase, BracketError>
    where
        R: Rng + ?Sized,
        S: EventSink + ?Sized,
    {
        self.phase = match self.phase {
            Phase::Building => {
                let roster = std::mem::take(&mut self.roster);
                let entrants = roster.len();
                let tier = build_bracket(roster, rng)?;
                tracing::info!(
                    "Tournament started with {} entrants ({} matches in tier 0)",
                    entrants,
                    tier.len()
                );
                self.tiers.push(tier);
                Phase::Resolving(0)
            }
            Phase::Resolving(index) => {
                let tier = &mut self.tiers[index];
                let mut winners = Vec::with_capacity(tier.len());
                for m in tier.matches.iter_mut() {
                    winners.push(resolve_match_with_config(m, rng, sink, &self.config));
                    sink.on_match_resolved(m);
                }
                tracing::info!("Tier {} complete: {} advance", index, winners.len());
                sink.on_tier_complete(index);
                self.winners = winners;
                Phase::Advancing(index)
            }
            Phase::Advancing(index) => {
                let mut winners = std::mem::take(&mut self.winners);
                if winners.len() <= 1 {
                    let champion = winners.pop().ok_or(BracketError::InsufficientRoster)?;
                    tracing::info!("{} is the champion after {} tiers", champion.name, index + 1);
                    sink.on_champion(&champion);
                    self.champion = Some(champion);
                    Phase::Complete
                } else {
                    let tier = pair_entrants(index + 1, winners);
                    tracing::debug!("Tier {} drawn: {} matches", index + 1, tier.len());
                    self.tiers.push(tier);
                    Phase::Resolving(index + 1)
                }
            }
            Phase::Complete => Phase::Complete,
        };
        Ok(self.phase)
    }

    /// Run every remaining transition
    pub fn run<R, S>(mut self, rng: &mut R, sink: &mut S) -> Result<TournamentOutcome, BracketError>
    where
        R: Rng + ?Sized,
        S: EventSink + ?Sized,
    {
        while self.step(rng, sink)? != Phase::Complete {}

        let champion = self.champion.ok_or(BracketError::InsufficientRoster)?;
        Ok(TournamentOutcome {
            champion,
            tiers: self.tiers,
        })
    }
}

/// Run a whole tournament with the default battle config
pub fn run_tournament<R, S>(
    roster: Vec<Combatant>,
    rng: &mut R,
    sink: &mut S,
) -> Result<TournamentOutcome, BracketError>
where
    R: Rng + ?Sized,
    S: EventSink + ?Sized,
{
    Tournament::new(roster).run(rng, sink)
}

/// Run a whole tournament with explicit battle constants
pub fn run_tournament_with_config<R, S>(
    roster: Vec<Combatant>,
    rng: &mut R,
    sink: &mut S,
    config: &BattleConfig,
) -> Result<TournamentOutcome, BracketError>
where
    R: Rng + ?Sized,
    S: EventSink + ?Sized,
{
    Tournament::with_config(roster, config.clone()).run(rng, sink)
}
