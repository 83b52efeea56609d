//! Damage calculation - turning two stat blocks into a hit

use roster_core::Stats;

/// Minimum damage any attack deals
pub const DEFAULT_DAMAGE_FLOOR: u32 = 10;

/// Calculate the damage `attacker` deals to `defender`
///
/// `max(floor, (attack + special-attack) - (defense + special-defense))`.
/// The floor applies however negative the differential is.
pub fn calculate_damage(attacker: &Stats, defender: &Stats, floor: u32) -> u32 {
    let raw = attacker.offense() - defender.guard();
    let damage = raw.max(i64::from(floor));
    u32::try_from(damage).unwrap_or(u32::MAX)
}
