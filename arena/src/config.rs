//! Arena configuration file (`arena.toml`)

use anyhow::{Context, Result};
use battle_core::BattleConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "arena.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub battle: BattleConfig,
    #[serde(default)]
    pub tournament: TournamentSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TournamentSettings {
    /// Roster file or directory
    #[serde(default = "default_roster")]
    pub roster: PathBuf,
    /// Entrants drawn from the roster when no ids are given
    #[serde(default = "default_entrants")]
    pub entrants: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        TournamentSettings {
            roster: default_roster(),
            entrants: default_entrants(),
            seed: None,
        }
    }
}

fn default_roster() -> PathBuf {
    PathBuf::from("data/roster.toml")
}

fn default_entrants() -> usize {
    16
}

impl ArenaConfig {
    /// Load from an explicit path, or from `arena.toml` if present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_PATH);
                if fallback.exists() {
                    Self::load_from_path(fallback)
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config '{}'", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in config '{}'", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ArenaConfig = toml::from_str(content)?;
        config.battle.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_file() {
        let config = ArenaConfig::from_toml_str(
            r#"
[battle]
damage_floor = 12

[tournament]
roster = "elsewhere/"
entrants = 8
seed = 42
"#,
        )
        .unwrap();
        assert_eq!(config.battle.damage_floor, 12);
        assert_eq!(config.tournament.roster, PathBuf::from("elsewhere/"));
        assert_eq!(config.tournament.entrants, 8);
        assert_eq!(config.tournament.seed, Some(42));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ArenaConfig::from_toml_str("").unwrap();
        assert_eq!(config.battle, BattleConfig::default());
        assert_eq!(config.tournament.entrants, 16);
        assert_eq!(config.tournament.seed, None);
    }

    #[test]
    fn test_invalid_floor_rejected() {
        assert!(ArenaConfig::from_toml_str("[battle]\ndamage_floor = 0\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = ArenaConfig::load(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }
}
