// src/hero/src/class/warrior.rs
use combat::{Character, Combatant, Report, Strike, StrikeKind};
use serde::{Deserialize, Serialize};

use crate::{Fighter, Player, class::Class};

/// 战士：近战，力量加成
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warrior {
    player: Player,
}

impl Warrior {
    pub const ATTACK_BONUS: u32 = 5;
    pub const POWER_STRIKE_BONUS: u32 = 15;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            player: Player::new(name, Class::Warrior),
        }
    }

    /// 强力一击
    pub fn power_strike(&mut self, target: &mut dyn Combatant) -> Strike {
        let damage = self.strength().saturating_add(Self::POWER_STRIKE_BONUS);
        Strike::deliver(self.name(), target, StrikeKind::PowerStrike, damage)
    }
}

impl Combatant for Warrior {
    fn character(&self) -> &Character {
        &self.player.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.player.character
    }

    fn attack(&mut self, target: &mut dyn Combatant) -> Strike {
        let damage = self.strength().saturating_add(Self::ATTACK_BONUS);
        Strike::deliver(self.name(), target, StrikeKind::Swing, damage)
    }

    fn report(&self) -> Report {
        self.player.report()
    }
}

impl Fighter for Warrior {
    fn class(&self) -> Class {
        Class::Warrior
    }

    fn player(&self) -> &Player {
        &self.player
    }

    fn special_ability(&mut self, target: &mut dyn Combatant) -> Strike {
        self.power_strike(target)
    }

    fn as_combatant_mut(&mut self) -> &mut dyn Combatant {
        self
    }
}
