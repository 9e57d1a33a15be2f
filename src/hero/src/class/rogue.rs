// src/hero/src/class/rogue.rs
use combat::{Character, Combatant, Report, Strike, StrikeKind};
use tracing::trace;

use crate::{
    Fighter, Player,
    class::Class,
    rng::{CritRoll, HeroRng},
};

/// 盗贼：普通攻击有概率暴击
///
/// The crit die is owned by the rogue and injected at construction, so a
/// seeded or scripted source makes every attack reproducible.
#[derive(Clone, Debug)]
pub struct Rogue<R: CritRoll = HeroRng> {
    player: Player,
    roller: R,
}

/// Draws at or below this value are critical hits (3 in 10).
pub const CRIT_THRESHOLD: u8 = 3;

impl Rogue<HeroRng> {
    /// 使用随机种子
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_roller(name, HeroRng::from_entropy())
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::with_roller(name, HeroRng::new(seed))
    }
}

impl<R: CritRoll> Rogue<R> {
    pub const CRIT_MULTIPLIER: u32 = 2;

    pub fn with_roller(name: impl Into<String>, roller: R) -> Self {
        Self {
            player: Player::new(name, Class::Rogue),
            roller,
        }
    }

    pub fn roller_mut(&mut self) -> &mut R {
        &mut self.roller
    }

    /// 偷袭：必定暴击
    pub fn sneak_attack(&mut self, target: &mut dyn Combatant) -> Strike {
        let damage = self.strength().saturating_mul(Self::CRIT_MULTIPLIER);
        Strike::deliver(self.name(), target, StrikeKind::SneakAttack, damage)
    }
}

impl<R: CritRoll> Combatant for Rogue<R> {
    fn character(&self) -> &Character {
        &self.player.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.player.character
    }

    fn attack(&mut self, target: &mut dyn Combatant) -> Strike {
        let roll = self.roller.roll_d10();
        let critical = roll <= CRIT_THRESHOLD;
        trace!(rogue = self.name(), roll, critical, "crit roll");

        let (kind, damage) = if critical {
            (
                StrikeKind::Critical,
                self.strength().saturating_mul(Self::CRIT_MULTIPLIER),
            )
        } else {
            (StrikeKind::Stab, self.strength())
        };
        Strike::deliver(self.name(), target, kind, damage)
    }

    fn report(&self) -> Report {
        self.player.report()
    }
}

impl<R: CritRoll> Fighter for Rogue<R> {
    fn class(&self) -> Class {
        Class::Rogue
    }

    fn player(&self) -> &Player {
        &self.player
    }

    fn special_ability(&mut self, target: &mut dyn Combatant) -> Strike {
        self.sneak_attack(target)
    }

    fn as_combatant_mut(&mut self) -> &mut dyn Combatant {
        self
    }
}
