// src/hero/src/class/mage.rs
use combat::{Character, Combatant, Report, Strike, StrikeKind};
use serde::{Deserialize, Serialize};

use crate::{Fighter, Player, class::Class};

/// 法师：以魔力代替力量造成伤害
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mage {
    player: Player,
}

impl Mage {
    pub const FIREBALL_BONUS: u32 = 10;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            player: Player::new(name, Class::Mage),
        }
    }

    /// 火球术
    pub fn fireball(&mut self, target: &mut dyn Combatant) -> Strike {
        let damage = self.magic().saturating_add(Self::FIREBALL_BONUS);
        Strike::deliver(self.name(), target, StrikeKind::Fireball, damage)
    }
}

impl Combatant for Mage {
    fn character(&self) -> &Character {
        &self.player.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.player.character
    }

    fn attack(&mut self, target: &mut dyn Combatant) -> Strike {
        Strike::deliver(self.name(), target, StrikeKind::Spell, self.magic())
    }

    fn report(&self) -> Report {
        self.player.report()
    }
}

impl Fighter for Mage {
    fn class(&self) -> Class {
        Class::Mage
    }

    fn player(&self) -> &Player {
        &self.player
    }

    fn special_ability(&mut self, target: &mut dyn Combatant) -> Strike {
        self.fireball(target)
    }

    fn as_combatant_mut(&mut self) -> &mut dyn Combatant {
        self
    }
}
