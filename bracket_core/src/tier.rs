use battle_core::{Combatant, Match};
use serde::Serialize;

/// One round of the tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tier {
    /// 0 for the initial bracket
    pub index: usize,
    pub matches: Vec<Match>,
}

impl Tier {
    pub fn new(index: usize, matches: Vec<Match>) -> Self {
        Tier { index, matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of combatants entering this tier
    pub fn entrant_count(&self) -> usize {
        self.matches.iter().map(|m| m.entrants().len()).sum()
    }

    pub fn bye_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_bye()).count()
    }

    pub fn is_resolved(&self) -> bool {
        self.matches.iter().all(Match::is_resolved)
    }

    /// Winners of the resolved matches, in match order
    pub fn winners(&self) -> Vec<&Combatant> {
        self.matches.iter().filter_map(Match::winner).collect()
    }
}
