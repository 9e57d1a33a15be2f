// src/combat/src/combatant.rs

use error::{GameError, non_blank, non_negative};
use serde::{Deserialize, Serialize};

use crate::report::Report;
use crate::strike::{Strike, StrikeKind};

/// 表示可以参加战斗的活体
///
/// Implementors own a [`Character`] record. `attack` is the single dispatch
/// point that variants override; everything else has a default in terms of
/// the record.
pub trait Combatant {
    /// 基础属性
    fn character(&self) -> &Character;

    fn character_mut(&mut self) -> &mut Character;

    /// 获取名称
    fn name(&self) -> &str {
        &self.character().name
    }

    /// 获取当前生命值
    fn health(&self) -> u32 {
        self.character().health
    }

    fn strength(&self) -> u32 {
        self.character().strength
    }

    fn magic(&self) -> u32 {
        self.character().magic
    }

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// 承受伤害，返回剩余生命值
    fn take_damage(&mut self, amount: u32) -> u32 {
        self.character_mut().apply_damage(amount)
    }

    /// 普通攻击（默认：力量值伤害）
    fn attack(&mut self, target: &mut dyn Combatant) -> Strike {
        self.character().base_attack(target)
    }

    /// 属性快照
    fn report(&self) -> Report {
        self.character().report()
    }
}

/// Base stat record shared by every combatant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub health: u32,
    pub strength: u32,
    pub magic: u32,
}

impl Character {
    pub fn new(name: impl Into<String>, health: u32, strength: u32, magic: u32) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            magic,
        }
    }

    /// Builds a character from signed input, rejecting negative stats and blank names.
    pub fn try_new(
        name: impl Into<String>,
        health: i64,
        strength: i64,
        magic: i64,
    ) -> Result<Self, GameError> {
        let name = name.into();
        non_blank("name", &name)?;
        Ok(Self {
            health: non_negative("health", health)?,
            strength: non_negative("strength", strength)?,
            magic: non_negative("magic", magic)?,
            name,
        })
    }

    /// Subtracts `amount` from health, flooring at zero. Returns the new health.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    pub fn try_apply_damage(&mut self, amount: i64) -> Result<u32, GameError> {
        let amount = non_negative("damage", amount)?;
        Ok(self.apply_damage(amount))
    }

    /// Restores health to an explicit value (target dummies between rounds).
    pub fn reset_health(&mut self, health: u32) {
        self.health = health;
    }

    pub fn base_attack(&self, target: &mut dyn Combatant) -> Strike {
        Strike::deliver(&self.name, target, StrikeKind::Basic, self.strength)
    }

    pub fn report(&self) -> Report {
        Report {
            name: self.name.clone(),
            health: self.health,
            strength: self.strength,
            magic: self.magic,
            progression: None,
        }
    }
}

impl Combatant for Character {
    fn character(&self) -> &Character {
        self
    }

    fn character_mut(&mut self) -> &mut Character {
        self
    }
}
