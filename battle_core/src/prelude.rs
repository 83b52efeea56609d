//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Match model
pub use crate::matchup::{Match, Pairing, Side};

// Resolution
pub use crate::resolution::{resolve_match, resolve_match_with_config, DuelOutcome};
pub use crate::damage::calculate_damage;

// Events
pub use crate::events::{BattleEvent, EventSink, NoopSink, RecordingSink};

// Config
pub use crate::config::BattleConfig;

// Re-exports from roster_core
pub use roster_core::{Combatant, CombatantId, Stats};
