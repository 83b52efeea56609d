//! Plain-text narration of tournament events

use battle_core::{Combatant, EventSink, Match, Pairing};
use bracket_core::Tier;
use std::io::{self, Write};

/// Event sink that writes a running commentary
///
/// With `quiet` set only match results and the champion are written. The
/// first write error is kept and every later line is dropped.
pub struct Narrator<W: Write> {
    out: W,
    quiet: bool,
    error: Option<io::Error>,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Narrator {
            out,
            quiet,
            error: None,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The write error that stopped narration, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Write the pairings of a tier
    pub fn bracket(&mut self, tier: &Tier) {
        self.line(format_args!("Bracket:"));
        for m in &tier.matches {
            match &m.pairing {
                Pairing::Duel(left, right) => self.line(format_args!("  {} vs {}", left.name, right.name)),
                Pairing::Bye(entrant) => self.line(format_args!("  {} (bye)", entrant.name)),
            }
        }
    }

    pub fn round(&mut self, tier_index: usize) {
        self.line(format_args!(""));
        self.line(format_args!("Round {}:", tier_index + 1));
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", args) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> EventSink for Narrator<W> {
    fn on_ability_used(&mut self, attacker: &Combatant, defender: &Combatant, ability: &str) {
        if !self.quiet {
            self.line(format_args!("    {} uses {} on {}!", attacker.name, ability, defender.name));
        }
    }

    fn on_damage(&mut self, defender: &Combatant, amount: u32, remaining_hp: u32) {
        if !self.quiet {
            self.line(format_args!(
                "    {} takes {} damage ({}/{} hp)",
                defender.name,
                amount,
                remaining_hp,
                defender.max_hp()
            ));
        }
    }

    fn on_ko(&mut self, loser: &Combatant) {
        if !self.quiet {
            self.line(format_args!("    {} is knocked out!", loser.name));
        }
    }

    fn on_match_resolved(&mut self, resolved: &Match) {
        let winner = resolved.winner().map_or("?", |c| c.name.as_str());
        match &resolved.pairing {
            Pairing::Duel(left, right) => {
                self.line(format_args!("  {} vs {} -> winner: {}", left.name, right.name, winner))
            }
            Pairing::Bye(entrant) => self.line(format_args!("  {} advances on a bye", entrant.name)),
        }
    }

    fn on_champion(&mut self, champion: &Combatant) {
        self.line(format_args!(""));
        self.line(format_args!("The champion is {}!", champion.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{resolve_match, Stats};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn combatant(id: u32, name: &str, attack: u32, speed: u32) -> Combatant {
        let stats = Stats {
            hp: 100,
            attack,
            defense: 20,
            special_attack: 20,
            special_defense: 20,
            speed,
        };
        Combatant::new(id, name, stats, vec!["tackle".into()]).unwrap()
    }

    fn narrate(quiet: bool) -> String {
        let mut narrator = Narrator::new(Vec::new(), quiet);
        let mut m = Match::duel(combatant(1, "pikachu", 80, 90), combatant(2, "onix", 40, 70));
        resolve_match(&mut m, &mut ChaCha8Rng::seed_from_u64(1), &mut narrator);
        narrator.on_match_resolved(&m);
        narrator.on_champion(m.winner().unwrap());
        String::from_utf8(narrator.into_inner()).unwrap()
    }

    #[test]
    fn test_full_narration() {
        let text = narrate(false);
        assert!(text.contains("pikachu uses tackle on onix!"));
        assert!(text.contains("onix takes 60 damage (40/100 hp)"));
        assert!(text.contains("onix is knocked out!"));
        assert!(text.contains("pikachu vs onix -> winner: pikachu"));
        assert!(text.ends_with("The champion is pikachu!\n"));
    }

    #[test]
    fn test_quiet_narration() {
        let text = narrate(true);
        assert!(!text.contains("uses"));
        assert!(text.contains("pikachu vs onix -> winner: pikachu"));
    }

    #[test]
    fn test_bracket_listing() {
        let mut narrator = Narrator::new(Vec::new(), false);
        let tier = bracket_core::pair_entrants(
            0,
            vec![combatant(1, "a", 1, 1), combatant(2, "b", 1, 1), combatant(3, "c", 1, 1)],
        );
        narrator.bracket(&tier);
        let text = String::from_utf8(narrator.into_inner()).unwrap();
        assert_eq!(text, "Bracket:\n  a vs b\n  c (bye)\n");
    }

    /// Accepts `limit` bytes, then fails every write
    struct ShortPipe {
        written: Vec<u8>,
        limit: usize,
        failed: bool,
        writes_after_failure: usize,
    }

    impl Write for ShortPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.failed {
                self.writes_after_failure += 1;
            }
            if self.written.len() + buf.len() > self.limit {
                self.failed = true;
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_stops_narration() {
        let pipe = ShortPipe {
            written: Vec::new(),
            limit: 10,
            failed: false,
            writes_after_failure: 0,
        };
        let mut narrator = Narrator::new(pipe, false);
        narrator.round(0);
        narrator.round(1);
        narrator.on_champion(&combatant(1, "pikachu", 80, 90));

        let err = narrator.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        let pipe = narrator.into_inner();
        assert_eq!(pipe.written, b"\nRound 1:\n");
        assert!(pipe.failed);
        assert_eq!(pipe.writes_after_failure, 0);
    }
}
