mod bracket;
mod tier;
mod tournament;

pub use bracket::{build_bracket, pair_entrants};
pub use tier::Tier;
pub use tournament::{
    run_tournament, run_tournament_with_config, Phase, Tournament, TournamentOutcome,
};

use thiserror::Error;

/// Error running a tournament
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("Cannot build a bracket from an empty roster")]
    InsufficientRoster,
}
