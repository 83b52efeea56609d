//! Match resolution - settle a Match with a turn-based duel

use crate::config::BattleConfig;
use crate::damage::calculate_damage;
use crate::events::EventSink;
use crate::matchup::{Match, Pairing, Side};
use roster_core::Combatant;
use rand::Rng;
use serde::Serialize;

/// Detail of a finished duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DuelOutcome {
    /// Winning side, in the duel's listed order
    pub winner: Side,
    /// Side that acted first every round
    pub first: Side,
    /// Rounds started (the last one may end before the second attacker acts)
    pub rounds: u32,
    /// Hit points left on the left entrant
    pub left_hp: u32,
    /// Hit points left on the right entrant
    pub right_hp: u32,
}

/// Decide which side acts first for a whole duel
///
/// Strictly higher speed goes first; a tie goes to the second-listed entrant.
pub fn turn_order(left: &Combatant, right: &Combatant) -> Side {
    if left.stats.speed > right.stats.speed {
        Side::Left
    } else {
        Side::Right
    }
}

/// Resolve a match using the default battle config
///
/// Returns the winner. Only combat events reach the sink: a bye is won by
/// its entrant with no events at all, and a match that is already resolved
/// returns its recorded winner. Reporting the settled match is left to the
/// caller.
pub fn resolve_match<R, S>(m: &mut Match, rng: &mut R, sink: &mut S) -> Combatant
where
    R: Rng + ?Sized,
    S: EventSink + ?Sized,
{
    resolve_match_with_config(m, rng, sink, &BattleConfig::default())
}

/// Resolve a match with explicit battle constants
pub fn resolve_match_with_config<R, S>(
    m: &mut Match,
    rng: &mut R,
    sink: &mut S,
    config: &BattleConfig,
) -> Combatant
where
    R: Rng + ?Sized,
    S: EventSink + ?Sized,
{
    if let Some(winner) = m.winner() {
        return winner.clone();
    }

    let side = match &m.pairing {
        Pairing::Bye(entrant) => {
            tracing::debug!("{} advances on a bye", entrant.name);
            Side::Left
        }
        Pairing::Duel(left, right) => {
            let outcome = resolve_duel(left, right, rng, sink, config);
            let (winner, loser) = match outcome.winner {
                Side::Left => (left, right),
                Side::Right => (right, left),
            };
            tracing::debug!(
                "{} defeats {} in {} rounds",
                winner.name,
                loser.name,
                outcome.rounds
            );
            outcome.winner
        }
    };

    m.record_winner(side).clone()
}

/// Fight a duel to a knockout
///
/// Turn order is fixed for the whole duel by [`turn_order`]. Each round the
/// first side strikes, then the second side strikes back if still standing.
pub fn resolve_duel<R, S>(
    left: &Combatant,
    right: &Combatant,
    rng: &mut R,
    sink: &mut S,
    config: &BattleConfig,
) -> DuelOutcome
where
    R: Rng + ?Sized,
    S: EventSink + ?Sized,
{
    let first_side = turn_order(left, right);
    let (first, second) = match first_side {
        Side::Left => (left, right),
        Side::Right => (right, left),
    };

    let mut first_hp = first.max_hp();
    let mut second_hp = second.max_hp();
    let mut rounds = 0u32;

    let winner = loop {
        rounds += 1;
        tracing::trace!("Round {}: {} ({}) vs {} ({})", rounds, first.name, first_hp, second.name, second_hp);

        if strike(first, second, &mut second_hp, rng, sink, config) {
            break first_side;
        }
        if strike(second, first, &mut first_hp, rng, sink, config) {
            break first_side.opposite();
        }
    };

    let (left_hp, right_hp) = match first_side {
        Side::Left => (first_hp, second_hp),
        Side::Right => (second_hp, first_hp),
    };

    DuelOutcome {
        winner,
        first: first_side,
        rounds,
        left_hp,
        right_hp,
    }
}

/// One attack; returns true if the defender is knocked out
fn strike<R, S>(
    attacker: &Combatant,
    defender: &Combatant,
    defender_hp: &mut u32,
    rng: &mut R,
    sink: &mut S,
    config: &BattleConfig,
) -> bool
where
    R: Rng + ?Sized,
    S: EventSink + ?Sized,
{
    // Flavor only: the ability never feeds the damage formula
    let ability = attacker.pick_ability(rng);
    sink.on_ability_used(attacker, defender, ability);

    let damage = calculate_damage(&attacker.stats, &defender.stats, config.damage_floor);
    *defender_hp = defender_hp.saturating_sub(damage);
    tracing::trace!(
        "{} uses {} on {} for {} damage ({} hp left)",
        attacker.name,
        ability,
        defender.name,
        damage,
        defender_hp
    );
    sink.on_damage(defender, damage, *defender_hp);

    if *defender_hp == 0 {
        sink.on_ko(defender);
        true
    } else {
        false
    }
}
