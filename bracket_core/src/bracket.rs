use crate::tier::Tier;
use crate::BracketError;
use battle_core::{Combatant, Match};
use rand::seq::SliceRandom;
use rand::Rng;

/// Build the initial tier from a roster
///
/// The roster is shuffled uniformly, then consecutive entrants are paired.
/// An odd roster leaves a trailing bye.
pub fn build_bracket<R: Rng + ?Sized>(
    mut roster: Vec<Combatant>,
    rng: &mut R,
) -> Result<Tier, BracketError> {
    if roster.is_empty() {
        return Err(BracketError::InsufficientRoster);
    }

    roster.shuffle(rng);
    let tier = pair_entrants(0, roster);
    tracing::debug!(
        "Built bracket: {} matches, {} byes",
        tier.len(),
        tier.bye_count()
    );
    Ok(tier)
}

/// Pair entrants consecutively into a tier, trailing bye for an odd count
pub fn pair_entrants(index: usize, entrants: Vec<Combatant>) -> Tier {
    let mut matches = Vec::with_capacity(entrants.len().div_ceil(2));
    let mut iter = entrants.into_iter();
    while let Some(left) = iter.next() {
        match iter.next() {
            Some(right) => matches.push(Match::duel(left, right)),
            None => matches.push(Match::bye(left)),
        }
    }
    Tier::new(index, matches)
}
