//! roster_core - Combatant records for the tournament engine
//!
//! This library provides:
//! - Stats: the fixed six-field stat block, parsed from `"key:value, ..."` text
//! - Combatant: a validated participant with stats and abilities
//! - CombatantRecord: the stored row shape (raw comma-joined strings)
//! - RosterStore: keyed read access to combatant records loaded from TOML/JSON

mod combatant;
mod config;
mod store;
pub mod types;

pub use combatant::{parse_abilities, Combatant, CombatantId};
pub use config::{CombatantRecord, RosterFileConfig};
pub use store::RosterStore;
pub use types::{StatKind, Stats};

use std::path::PathBuf;
use thiserror::Error;

/// Error validating a combatant's raw data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed stats: {0}")]
    MalformedStats(String),
    #[error("Combatant has no abilities")]
    EmptyAbilityList,
    #[error("Combatant id must be positive, got {0}")]
    InvalidId(u32),
}

/// Error loading roster files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("TOML parse error in '{path}': {error}")]
    Toml {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("JSON parse error in '{path}': {error}")]
    Json {
        error: serde_json::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error reading combatants out of a store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Unknown combatant id: {0}")]
    UnknownCombatant(u32),
    #[error("Not enough combatants: requested {requested}, only {available} available")]
    NotEnough { requested: usize, available: usize },
    #[error("Duplicate combatant id: {0}")]
    DuplicateId(u32),
    #[error(transparent)]
    Invalid(#[from] ParseError),
}
