// src/hero/src/class.rs

use items::Weapon;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

pub mod mage;
pub mod rogue;
pub mod warrior;

use crate::Fighter;
use self::{mage::Mage, rogue::Rogue, warrior::Warrior};

/// 英雄职业枚举
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Class {
    #[default]
    Warrior, // 战士（高生命值，近战）
    Mage,  // 法师（低生命值，魔法伤害）
    Rogue, // 盗贼（中等生命值，暴击）
}

impl Class {
    /// 获取职业的基础生命值
    pub fn base_health(&self) -> u32 {
        match self {
            Class::Warrior => 120,
            Class::Mage => 80,
            Class::Rogue => 90,
        }
    }

    pub fn base_strength(&self) -> u32 {
        match self {
            Class::Warrior => 15,
            Class::Mage => 8,
            Class::Rogue => 12,
        }
    }

    pub fn base_magic(&self) -> u32 {
        match self {
            Class::Warrior => 5,
            Class::Mage => 20,
            Class::Rogue => 10,
        }
    }

    /// Label shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Class::Warrior => "Warrior",
            Class::Mage => "Mage",
            Class::Rogue => "Rogue",
        }
    }

    /// 展示用的初始武器（不参与伤害计算）
    pub fn starting_weapon(&self) -> Weapon {
        match self {
            Class::Warrior => Weapon::new("Iron Sword", 10),
            Class::Mage => Weapon::new("Magic Staff", 15),
            Class::Rogue => Weapon::new("Steel Dagger", 8),
        }
    }

    /// Builds a fighter of this class. `seed` only matters for classes that roll dice.
    pub fn spawn(&self, name: impl Into<String>, seed: u64) -> Box<dyn Fighter> {
        match self {
            Class::Warrior => Box::new(Warrior::new(name)),
            Class::Mage => Box::new(Mage::new(name)),
            Class::Rogue => Box::new(Rogue::with_seed(name, seed)),
        }
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn stat_table() {
        let stats: Vec<_> = Class::iter()
            .map(|c| (c.label(), c.base_health(), c.base_strength(), c.base_magic()))
            .collect();
        assert_eq!(
            stats,
            vec![
                ("Warrior", 120, 15, 5),
                ("Mage", 80, 8, 20),
                ("Rogue", 90, 12, 10),
            ]
        );
    }

    #[test]
    fn spawn_matches_class() {
        for class in Class::iter() {
            let fighter = class.spawn("Test", 1);
            assert_eq!(fighter.class(), class);
            assert_eq!(fighter.health(), class.base_health());
            assert_eq!(
                fighter.report().progression.map(|p| p.class),
                Some(class.to_string())
            );
        }
    }

    #[test]
    fn starting_weapons_are_display_only() {
        assert_eq!(
            Class::Mage.starting_weapon().to_string(),
            "Weapon: Magic Staff | Damage Bonus: +15"
        );
    }
}
