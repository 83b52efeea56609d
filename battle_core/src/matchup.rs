//! Match model - one bracket slot and its outcome

use roster_core::Combatant;
use serde::Serialize;
use thiserror::Error;

/// Error building a match
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("A match takes one or two entrants, got {0}")]
    InvalidEntrants(usize),
}

/// Which entrant of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The first-listed entrant (and the only entrant of a bye)
    Left,
    /// The second-listed entrant
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The entrants of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// Two combatants fight
    Duel(Combatant, Combatant),
    /// One combatant advances unopposed
    Bye(Combatant),
}

/// A bracket slot: its entrants and, once resolved, the winning side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub pairing: Pairing,
    winner: Option<Side>,
}

impl Match {
    pub fn duel(left: Combatant, right: Combatant) -> Self {
        Match {
            pairing: Pairing::Duel(left, right),
            winner: None,
        }
    }

    pub fn bye(entrant: Combatant) -> Self {
        Match {
            pairing: Pairing::Bye(entrant),
            winner: None,
        }
    }

    /// Build a duel from two entrants or a bye from one
    pub fn from_entrants(entrants: Vec<Combatant>) -> Result<Self, MatchError> {
        let count = entrants.len();
        let mut iter = entrants.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(left), Some(right), None) => Ok(Match::duel(left, right)),
            (Some(entrant), None, None) => Ok(Match::bye(entrant)),
            _ => Err(MatchError::InvalidEntrants(count)),
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self.pairing, Pairing::Bye(_))
    }

    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }

    /// Entrant on the given side (`None` for the right side of a bye)
    pub fn entrant(&self, side: Side) -> Option<&Combatant> {
        match (&self.pairing, side) {
            (Pairing::Duel(left, _), Side::Left) => Some(left),
            (Pairing::Duel(_, right), Side::Right) => Some(right),
            (Pairing::Bye(entrant), Side::Left) => Some(entrant),
            (Pairing::Bye(_), Side::Right) => None,
        }
    }

    /// All entrants, in listed order
    pub fn entrants(&self) -> Vec<&Combatant> {
        match &self.pairing {
            Pairing::Duel(left, right) => vec![left, right],
            Pairing::Bye(entrant) => vec![entrant],
        }
    }

    pub fn winner_side(&self) -> Option<Side> {
        self.winner
    }

    /// The winning combatant, once resolved
    pub fn winner(&self) -> Option<&Combatant> {
        self.winner.and_then(|side| self.entrant(side))
    }

    /// The losing combatant of a resolved duel
    pub fn loser(&self) -> Option<&Combatant> {
        match self.pairing {
            Pairing::Duel(..) => self.winner.and_then(|side| self.entrant(side.opposite())),
            Pairing::Bye(_) => None,
        }
    }

    /// Record the winning side and return the winner
    ///
    /// A bye is always won by its only entrant.
    pub(crate) fn record_winner(&mut self, side: Side) -> &Combatant {
        let side = if self.is_bye() { Side::Left } else { side };
        self.winner = Some(side);
        match (&self.pairing, side) {
            (Pairing::Duel(left, _), Side::Left) | (Pairing::Bye(left), _) => left,
            (Pairing::Duel(_, right), Side::Right) => right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combatant(id: u32) -> Combatant {
        Combatant::parse(
            id,
            format!("mon-{}", id),
            "hp:50, attack:50, defense:50, special-attack:50, special-defense:50, speed:50",
            "tackle",
        )
        .unwrap()
    }

    #[test]
    fn test_from_entrants() {
        assert!(Match::from_entrants(vec![combatant(1)]).unwrap().is_bye());
        assert!(!Match::from_entrants(vec![combatant(1), combatant(2)]).unwrap().is_bye());
        assert_eq!(
            Match::from_entrants(vec![]),
            Err(MatchError::InvalidEntrants(0))
        );
        assert_eq!(
            Match::from_entrants(vec![combatant(1), combatant(2), combatant(3)]),
            Err(MatchError::InvalidEntrants(3))
        );
    }

    #[test]
    fn test_winner_and_loser() {
        let mut m = Match::duel(combatant(1), combatant(2));
        assert!(m.winner().is_none());
        m.record_winner(Side::Right);
        assert_eq!(m.winner().map(|c| c.id), Some(2));
        assert_eq!(m.loser().map(|c| c.id), Some(1));
    }

    #[test]
    fn test_bye_has_no_right_side() {
        let mut m = Match::bye(combatant(7));
        assert!(m.entrant(Side::Right).is_none());
        m.record_winner(Side::Right);
        assert_eq!(m.winner_side(), Some(Side::Left));
        assert_eq!(m.winner().map(|c| c.id), Some(7));
        assert!(m.loser().is_none());
    }
}
