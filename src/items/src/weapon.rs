//src/items/src/weapon.rs
use error::{GameError, non_blank, non_negative};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 武器（展示用的值对象）
///
/// A character "has-a" weapon only for display. The damage bonus is never
/// read by any attack formula.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage_bonus: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage_bonus: u32) -> Self {
        Self {
            name: name.into(),
            damage_bonus,
        }
    }

    /// Checked constructor for untrusted input
    pub fn try_new(name: impl Into<String>, damage_bonus: i64) -> Result<Self, GameError> {
        let name = name.into();
        non_blank("weapon name", &name)?;
        let damage_bonus = non_negative("damage bonus", damage_bonus)?;
        Ok(Self { name, damage_bonus })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage_bonus(&self) -> u32 {
        self.damage_bonus
    }

    /// 武器信息行
    pub fn display_info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weapon: {} | Damage Bonus: +{}",
            self.name, self.damage_bonus
        )
    }
}
