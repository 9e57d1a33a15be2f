// src/hero/src/player.rs
use combat::{Character, Combatant, Progression, Report};
use serde::{Deserialize, Serialize};

use crate::class::Class;

/// 玩家角色：基础属性 + 成长数据
///
/// Progression is carried for display; nothing in combat reads or changes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub character: Character,
    pub class: Class,
    pub level: u32,
    pub experience: u32,
}

impl Player {
    /// Creates a level 1 player with the class's starting stats.
    pub fn new(name: impl Into<String>, class: Class) -> Self {
        let character = Character::new(
            name,
            class.base_health(),
            class.base_strength(),
            class.base_magic(),
        );
        Self::with_character(character, class)
    }

    /// Wraps an existing stat block, e.g. one built with `Character::try_new`.
    pub fn with_character(character: Character, class: Class) -> Self {
        Self {
            character,
            class,
            level: 1,
            experience: 0,
        }
    }

    pub fn progression(&self) -> Progression {
        Progression {
            class: self.class.label().to_string(),
            level: self.level,
            experience: self.experience,
        }
    }
}

impl Combatant for Player {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    fn report(&self) -> Report {
        self.character.report().with_progression(self.progression())
    }
}
