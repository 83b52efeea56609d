use crate::combatant::{Combatant, CombatantId};
use crate::config::{CombatantRecord, RosterFileConfig};
use crate::{ConfigError, StoreError};
use rand::Rng;
use std::collections::BTreeMap;
use std::path::Path;

/// Keyed store of validated combatants, loaded from TOML or JSON files
#[derive(Debug, Default, Clone)]
pub struct RosterStore {
    combatants: BTreeMap<CombatantId, Combatant>,
}

impl RosterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a roster file, or every roster file under a directory (recursively)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut store = Self::new();
        if path.is_dir() {
            store.load_dir(path)?;
        } else {
            store.load_file(path)?;
        }
        Ok(store)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            paths.push(entry.path());
        }
        // read_dir order is platform dependent
        paths.sort();

        for path in paths {
            if path.is_dir() {
                self.load_dir(&path)?;
            } else if has_extension(&path, "toml") || has_extension(&path, "json") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single roster file
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let records: Vec<CombatantRecord> = if has_extension(path, "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Json {
                error: e,
                path: path.to_path_buf(),
            })?
        } else {
            let config: RosterFileConfig = toml::from_str(&content).map_err(|e| ConfigError::Toml {
                error: e,
                path: path.to_path_buf(),
            })?;
            config.combatants
        };

        let count = records.len();
        for record in records {
            self.insert(record).map_err(|e| ConfigError::Validation {
                message: e.to_string(),
                path: path.to_path_buf(),
            })?;
        }

        tracing::debug!("Loaded {} combatants from {}", count, path.display());
        Ok(())
    }

    /// Validate and store a record
    pub fn insert(&mut self, record: CombatantRecord) -> Result<(), StoreError> {
        let combatant = Combatant::try_from(record)?;
        self.insert_combatant(combatant)
    }

    /// Store an already-validated combatant
    pub fn insert_combatant(&mut self, combatant: Combatant) -> Result<(), StoreError> {
        if self.combatants.contains_key(&combatant.id) {
            return Err(StoreError::DuplicateId(combatant.id));
        }
        self.combatants.insert(combatant.id, combatant);
        Ok(())
    }

    /// Get a combatant by ID
    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    /// Check if a combatant exists
    pub fn contains(&self, id: CombatantId) -> bool {
        self.combatants.contains_key(&id)
    }

    /// All stored IDs, ascending
    pub fn ids(&self) -> impl Iterator<Item = CombatantId> + '_ {
        self.combatants.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Read the combatants for an id-set, in the order requested
    ///
    /// Repeated IDs are returned once.
    pub fn select(&self, ids: &[CombatantId]) -> Result<Vec<Combatant>, StoreError> {
        let mut selected: Vec<Combatant> = Vec::with_capacity(ids.len());
        for &id in ids {
            if selected.iter().any(|c| c.id == id) {
                continue;
            }
            let combatant = self.get(id).ok_or(StoreError::UnknownCombatant(id))?;
            selected.push(combatant.clone());
        }
        Ok(selected)
    }

    /// Pick `count` distinct combatants uniformly at random
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Combatant>, StoreError> {
        let available = self.combatants.len();
        if count > available {
            return Err(StoreError::NotEnough {
                requested: count,
                available,
            });
        }

        let all: Vec<&Combatant> = self.combatants.values().collect();
        Ok(rand::seq::index::sample(rng, available, count)
            .into_iter()
            .map(|i| all[i].clone())
            .collect())
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}
