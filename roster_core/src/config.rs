use serde::{Deserialize, Serialize};

/// TOML configuration for a roster file
#[derive(Debug, Default, Deserialize)]
pub struct RosterFileConfig {
    #[serde(default)]
    pub combatants: Vec<CombatantRecord>,
}

/// One stored combatant row
///
/// `abilities`, `types` and `stats` are kept as the comma-joined strings they
/// are stored as; validation happens when converting into a `Combatant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub abilities: String,
    #[serde(default)]
    pub types: Option<String>,
    pub stats: String,
}
