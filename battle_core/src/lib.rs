//! battle_core - Match resolution for the tournament engine
//!
//! This library provides:
//! - Match: one or two entrants plus the recorded winner
//! - resolve_match: the turn-based duel that settles a Match
//! - calculate_damage: the floored offense-vs-guard damage formula
//! - EventSink: observer for narration (ability used, damage, KO, ...)
//! - BattleConfig: tunable battle constants loaded from TOML
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use battle_core::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut m = Match::duel(bulbasaur, charmander);
//! let winner = resolve_match(&mut m, &mut rng, &mut NoopSink);
//! println!("{} wins!", winner.name);
//! ```

pub mod config;
pub mod damage;
pub mod events;
pub mod matchup;
pub mod prelude;
pub mod resolution;

pub use config::{BattleConfig, ConfigError};
pub use damage::{calculate_damage, DEFAULT_DAMAGE_FLOOR};
pub use events::{BattleEvent, EventSink, NoopSink, RecordingSink};
pub use matchup::{Match, MatchError, Pairing, Side};
pub use resolution::{resolve_duel, resolve_match, resolve_match_with_config, turn_order, DuelOutcome};

// Re-export commonly needed roster_core types
pub use roster_core::{Combatant, CombatantId, Stats};
