use crate::config::CombatantRecord;
use crate::types::Stats;
use crate::ParseError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Unique positive combatant identifier
pub type CombatantId = u32;

/// A validated tournament participant
///
/// Only constructed through [`Combatant::new`] or from a [`CombatantRecord`],
/// so the ability list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    /// Informational only, never used in battle
    pub base_experience: u32,
    pub height: Option<u32>,
    pub weight: Option<u32>,
    pub stats: Stats,
    abilities: Vec<String>,
    types: Vec<String>,
}

impl Combatant {
    /// Create a combatant from already-typed stats
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        stats: Stats,
        abilities: Vec<String>,
    ) -> Result<Self, ParseError> {
        if id == 0 {
            return Err(ParseError::InvalidId(id));
        }
        if stats.hp == 0 {
            return Err(ParseError::MalformedStats("'hp' must be positive".to_string()));
        }

        let abilities = dedup_ordered(
            abilities
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        );
        if abilities.is_empty() {
            return Err(ParseError::EmptyAbilityList);
        }

        Ok(Combatant {
            id,
            name: name.into(),
            base_experience: 0,
            height: None,
            weight: None,
            stats,
            abilities,
            types: Vec::new(),
        })
    }

    /// Parse a combatant from raw stat and ability strings
    pub fn parse(
        id: CombatantId,
        name: impl Into<String>,
        raw_stats: &str,
        raw_abilities: &str,
    ) -> Result<Self, ParseError> {
        let stats = Stats::parse(raw_stats)?;
        let abilities = parse_abilities(raw_abilities)?;
        Combatant::new(id, name, stats, abilities)
    }

    pub fn with_base_experience(mut self, base_experience: u32) -> Self {
        self.base_experience = base_experience;
        self
    }

    pub fn with_types(mut self, types: Vec<String>) -> Self {
        self.types = types;
        self
    }

    /// Ability names, in listed order
    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    /// Type names (informational)
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Maximum hit points
    pub fn max_hp(&self) -> u32 {
        self.stats.hp
    }

    /// Pick an ability uniformly at random, for narration
    ///
    /// This draw is cosmetic and never feeds into damage.
    pub fn pick_ability<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.abilities.choose(rng).map_or("", String::as_str)
    }
}

impl TryFrom<CombatantRecord> for Combatant {
    type Error = ParseError;

    fn try_from(record: CombatantRecord) -> Result<Self, Self::Error> {
        let mut combatant =
            Combatant::parse(record.id, record.name, &record.stats, &record.abilities)?;
        combatant.base_experience = record.base_experience.unwrap_or(0);
        combatant.height = record.height;
        combatant.weight = record.weight;
        combatant.types = split_list(record.types.as_deref().unwrap_or(""));
        Ok(combatant)
    }
}

/// Parse a comma-separated ability list into an ordered set
pub fn parse_abilities(raw: &str) -> Result<Vec<String>, ParseError> {
    let abilities = split_list(raw);
    if abilities.is_empty() {
        return Err(ParseError::EmptyAbilityList);
    }
    Ok(abilities)
}

fn split_list(raw: &str) -> Vec<String> {
    dedup_ordered(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    )
}

fn dedup_ordered(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const STATS: &str =
        "hp:45, attack:49, defense:49, special-attack:65, special-defense:65, speed:45";

    #[test]
    fn test_parse_combatant() {
        let c = Combatant::parse(1, "bulbasaur", STATS, "overgrow, chlorophyll").unwrap();
        assert_eq!(c.id, 1);
        assert_eq!(c.name, "bulbasaur");
        assert_eq!(c.max_hp(), 45);
        assert_eq!(c.abilities(), &["overgrow".to_string(), "chlorophyll".to_string()]);
    }

    #[test]
    fn test_abilities_are_ordered_set() {
        let abilities = parse_abilities(" blaze, , solar-power, blaze ").unwrap();
        assert_eq!(abilities, vec!["blaze".to_string(), "solar-power".to_string()]);
    }

    #[test]
    fn test_empty_ability_list() {
        assert_eq!(parse_abilities(""), Err(ParseError::EmptyAbilityList));
        assert_eq!(parse_abilities(" , ,"), Err(ParseError::EmptyAbilityList));
        let err = Combatant::parse(1, "x", STATS, "").unwrap_err();
        assert_eq!(err, ParseError::EmptyAbilityList);
    }

    #[test]
    fn test_zero_id_rejected() {
        let err = Combatant::parse(0, "x", STATS, "a").unwrap_err();
        assert_eq!(err, ParseError::InvalidId(0));
    }

    #[test]
    fn test_from_record() {
        let record = CombatantRecord {
            id: 6,
            name: "charizard".to_string(),
            height: Some(17),
            weight: Some(905),
            base_experience: Some(267),
            abilities: "blaze, solar-power".to_string(),
            types: Some("fire, flying".to_string()),
            stats: "hp:78, attack:84, defense:78, special-attack:109, special-defense:85, speed:100"
                .to_string(),
        };

        let c = Combatant::try_from(record).unwrap();
        assert_eq!(c.base_experience, 267);
        assert_eq!(c.height, Some(17));
        assert_eq!(c.types(), &["fire".to_string(), "flying".to_string()]);
        assert_eq!(c.stats.speed, 100);
    }

    #[test]
    fn test_pick_ability_is_from_list() {
        let c = Combatant::parse(1, "x", STATS, "a, b, c").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let ability = c.pick_ability(&mut rng);
            assert!(c.abilities().iter().any(|a| a == ability));
        }
    }
}
