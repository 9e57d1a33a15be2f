//! Shared builders for integration tests.

use character_showcase::combat::Character;
use character_showcase::hero::{Rogue, ScriptedRoll};

/// A stat-less target with the given health
pub fn dummy(health: u32) -> Character {
    Character::new("Target Dummy", health, 0, 0)
}

/// Rogue whose every crit roll comes out as `roll`
pub fn rogue_rolling(roll: u8) -> Rogue<ScriptedRoll> {
    Rogue::with_roller("Robin Hood", ScriptedRoll::always(roll))
}
