// src/hero/src/lib.rs

mod player;
mod rng;

pub mod class;

use combat::{Combatant, Strike};

// 重新导出主要类型
pub use self::{
    class::{Class, mage::Mage, rogue::Rogue, warrior::Warrior},
    player::Player,
    rng::{CritRoll, HeroRng, ROLL_SIDES, ScriptedRoll},
};

/// 职业角色接口：普通攻击之外的专属技能
pub trait Fighter: Combatant {
    fn class(&self) -> Class;

    fn player(&self) -> &Player;

    /// 职业专属技能，伤害高于普通攻击
    fn special_ability(&mut self, target: &mut dyn Combatant) -> Strike;

    /// View as a plain combatant, e.g. for `Battle::engage`.
    fn as_combatant_mut(&mut self) -> &mut dyn Combatant;
}
