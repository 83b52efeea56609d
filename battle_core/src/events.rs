//! Battle events - the observation contract for narration and telemetry
//!
//! Resolution never depends on what a sink does with an event.

use crate::matchup::Match;
use roster_core::{Combatant, CombatantId};
use serde::Serialize;

/// Receiver of events emitted while a tournament is resolved
///
/// Every method defaults to doing nothing, so implementors only override
/// what they render.
pub trait EventSink {
    /// `attacker` is about to hit `defender` with `ability`
    fn on_ability_used(&mut self, _attacker: &Combatant, _defender: &Combatant, _ability: &str) {}

    /// `defender` took `amount` damage and has `remaining_hp` left
    fn on_damage(&mut self, _defender: &Combatant, _amount: u32, _remaining_hp: u32) {}

    /// `loser` was knocked out
    fn on_ko(&mut self, _loser: &Combatant) {}

    /// A match has a winner
    fn on_match_resolved(&mut self, _resolved: &Match) {}

    /// Every match of tier `tier_index` has been resolved
    fn on_tier_complete(&mut self, _tier_index: usize) {}

    /// The tournament is over
    fn on_champion(&mut self, _champion: &Combatant) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_ability_used(&mut self, attacker: &Combatant, defender: &Combatant, ability: &str) {
        (**self).on_ability_used(attacker, defender, ability)
    }

    fn on_damage(&mut self, defender: &Combatant, amount: u32, remaining_hp: u32) {
        (**self).on_damage(defender, amount, remaining_hp)
    }

    fn on_ko(&mut self, loser: &Combatant) {
        (**self).on_ko(loser)
    }

    fn on_match_resolved(&mut self, resolved: &Match) {
        (**self).on_match_resolved(resolved)
    }

    fn on_tier_complete(&mut self, tier_index: usize) {
        (**self).on_tier_complete(tier_index)
    }

    fn on_champion(&mut self, champion: &Combatant) {
        (**self).on_champion(champion)
    }
}

/// Sink that discards everything, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {}

/// A recorded event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    AbilityUsed {
        attacker: CombatantId,
        defender: CombatantId,
        ability: String,
    },
    Damage {
        defender: CombatantId,
        amount: u32,
        remaining_hp: u32,
    },
    Ko {
        loser: CombatantId,
    },
    MatchResolved {
        entrants: Vec<CombatantId>,
        winner: Option<CombatantId>,
    },
    TierComplete {
        tier: usize,
    },
    Champion {
        champion: CombatantId,
    },
}

impl BattleEvent {
    /// Whether this event comes from an exchange of blows
    pub fn is_combat(&self) -> bool {
        matches!(
            self,
            BattleEvent::AbilityUsed { .. } | BattleEvent::Damage { .. } | BattleEvent::Ko { .. }
        )
    }
}

/// Sink that keeps every event in order
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<BattleEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Export the event log as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }
}

impl EventSink for RecordingSink {
    fn on_ability_used(&mut self, attacker: &Combatant, defender: &Combatant, ability: &str) {
        self.events.push(BattleEvent::AbilityUsed {
            attacker: attacker.id,
            defender: defender.id,
            ability: ability.to_string(),
        });
    }

    fn on_damage(&mut self, defender: &Combatant, amount: u32, remaining_hp: u32) {
        self.events.push(BattleEvent::Damage {
            defender: defender.id,
            amount,
            remaining_hp,
        });
    }

    fn on_ko(&mut self, loser: &Combatant) {
        self.events.push(BattleEvent::Ko { loser: loser.id });
    }

    fn on_match_resolved(&mut self, resolved: &Match) {
        self.events.push(BattleEvent::MatchResolved {
            entrants: resolved.entrants().iter().map(|c| c.id).collect(),
            winner: resolved.winner().map(|c| c.id),
        });
    }

    fn on_tier_complete(&mut self, tier_index: usize) {
        self.events.push(BattleEvent::TierComplete { tier: tier_index });
    }

    fn on_champion(&mut self, champion: &Combatant) {
        self.events.push(BattleEvent::Champion {
            champion: champion.id,
        });
    }
}
