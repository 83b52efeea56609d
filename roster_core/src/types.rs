use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six stats every combatant carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    /// Get all stat kinds, in canonical order
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Hp,
            StatKind::Attack,
            StatKind::Defense,
            StatKind::SpecialAttack,
            StatKind::SpecialDefense,
            StatKind::Speed,
        ]
    }

    /// Key used in stat strings (`special-attack`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            StatKind::Hp => "hp",
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::SpecialAttack => "special-attack",
            StatKind::SpecialDefense => "special-defense",
            StatKind::Speed => "speed",
        }
    }

    /// Look up a stat kind by its key
    pub fn from_key(key: &str) -> Option<StatKind> {
        StatKind::all().iter().copied().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fixed-shape stat block
///
/// `hp` is the maximum hit points and never changes; battles track their own
/// running hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Parse a stat string of the form `"hp:45, attack:49, ..."`
    ///
    /// All six stats are required exactly once and `hp` must be positive.
    /// Unknown keys are skipped.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let mut values: [Option<u32>; 6] = [None; 6];

        for segment in raw.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let (key, value) = segment.split_once(':').ok_or_else(|| {
                ParseError::MalformedStats(format!("expected 'key:value', got '{}'", segment))
            })?;
            let key = key.trim();
            let value = value.trim();

            let Some(kind) = StatKind::from_key(key) else {
                tracing::debug!("Ignoring unknown stat '{}'", key);
                continue;
            };

            let parsed = value.parse::<u32>().map_err(|_| {
                ParseError::MalformedStats(format!("'{}' is not a non-negative integer: '{}'", key, value))
            })?;
            if values[kind as usize].replace(parsed).is_some() {
                return Err(ParseError::MalformedStats(format!("'{}' given more than once", key)));
            }
        }

        let get = |kind: StatKind| {
            values[kind as usize]
                .ok_or_else(|| ParseError::MalformedStats(format!("missing '{}'", kind.key())))
        };

        let stats = Stats {
            hp: get(StatKind::Hp)?,
            attack: get(StatKind::Attack)?,
            defense: get(StatKind::Defense)?,
            special_attack: get(StatKind::SpecialAttack)?,
            special_defense: get(StatKind::SpecialDefense)?,
            speed: get(StatKind::Speed)?,
        };

        if stats.hp == 0 {
            return Err(ParseError::MalformedStats("'hp' must be positive".to_string()));
        }

        Ok(stats)
    }

    /// Read a single stat
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    /// Combined offensive power (`attack + special-attack`)
    pub fn offense(&self) -> i64 {
        i64::from(self.attack) + i64::from(self.special_attack)
    }

    /// Combined defensive power (`defense + special-defense`)
    pub fn guard(&self) -> i64 {
        i64::from(self.defense) + i64::from(self.special_defense)
    }
}

impl FromStr for Stats {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stats::parse(s)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in StatKind::all().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", kind.key(), self.get(*kind))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str =
        "hp:45, attack:49, defense:49, special-attack:65, special-defense:65, speed:45";

    #[test]
    fn test_parse_reads_back_each_field() {
        let stats = Stats::parse(BULBASAUR).unwrap();
        assert_eq!(stats.hp, 45);
        assert_eq!(stats.attack, 49);
        assert_eq!(stats.defense, 49);
        assert_eq!(stats.special_attack, 65);
        assert_eq!(stats.special_defense, 65);
        assert_eq!(stats.speed, 45);
        assert_eq!(stats.to_string(), BULBASAUR);
    }

    #[test]
    fn test_parse_ignores_order_and_whitespace() {
        let stats: Stats =
            "speed:1,hp: 2 ,  attack :3, defense:4, special-defense:6, special-attack:5"
                .parse()
                .unwrap();
        assert_eq!(stats.hp, 2);
        assert_eq!(stats.special_attack, 5);
        assert_eq!(stats.special_defense, 6);
        assert_eq!(stats.speed, 1);
    }

    #[test]
    fn test_parse_skips_unknown_keys() {
        let raw = format!("{}, accuracy:100", BULBASAUR);
        assert!(Stats::parse(&raw).is_ok());
    }

    #[test]
    fn test_missing_key() {
        let err = Stats::parse("hp:45, attack:49, defense:49, special-attack:65, speed:45")
            .unwrap_err();
        assert!(matches!(err, ParseError::MalformedStats(msg) if msg.contains("special-defense")));
    }

    #[test]
    fn test_non_integer_value() {
        let raw = BULBASAUR.replace("attack:49", "attack:lots");
        assert!(matches!(Stats::parse(&raw), Err(ParseError::MalformedStats(_))));

        let raw = BULBASAUR.replace("speed:45", "speed:-3");
        assert!(matches!(Stats::parse(&raw), Err(ParseError::MalformedStats(_))));
    }

    #[test]
    fn test_segment_without_separator() {
        let raw = format!("{}, hp45", BULBASAUR);
        assert!(matches!(Stats::parse(&raw), Err(ParseError::MalformedStats(_))));
    }

    #[test]
    fn test_repeated_key_rejected() {
        let raw = format!("{}, hp:90", BULBASAUR);
        let err = Stats::parse(&raw).unwrap_err();
        assert!(matches!(err, ParseError::MalformedStats(msg) if msg.contains("'hp'")));
    }

    #[test]
    fn test_zero_hp_rejected() {
        let raw = BULBASAUR.replace("hp:45", "hp:0");
        assert!(matches!(Stats::parse(&raw), Err(ParseError::MalformedStats(_))));
    }

    #[test]
    fn test_offense_and_guard() {
        let stats = Stats::parse(BULBASAUR).unwrap();
        assert_eq!(stats.offense(), 114);
        assert_eq!(stats.guard(), 114);
    }

    #[test]
    fn test_stat_kind_keys_round_trip() {
        for kind in StatKind::all() {
            assert_eq!(StatKind::from_key(kind.key()), Some(*kind));
        }
        assert_eq!(StatKind::from_key("special_attack"), None);
    }
}
