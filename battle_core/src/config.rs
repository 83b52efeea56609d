//! Battle constants configuration

use crate::damage::DEFAULT_DAMAGE_FLOOR;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error loading battle configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Tunable battle constants
///
/// Passed explicitly into resolution; there is no global instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Minimum damage dealt by any attack
    #[serde(default = "default_damage_floor")]
    pub damage_floor: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            damage_floor: DEFAULT_DAMAGE_FLOOR,
        }
    }
}

fn default_damage_floor() -> u32 {
    DEFAULT_DAMAGE_FLOOR
}

impl BattleConfig {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse constants from TOML text
    ///
    /// Accepts either a `[battle]` section or bare top-level keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut table: toml::Table = toml::from_str(content)?;
        let config: BattleConfig = match table.remove("battle") {
            Some(section) => section.try_into()?,
            None => toml::Value::Table(table).try_into()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the resolver relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        // a zero floor lets two walls trade 0 damage forever
        if self.damage_floor == 0 {
            return Err(ConfigError::ValidationError(
                "damage_floor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
