// src/combat/src/strike.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::combatant::Combatant;

/// How a blow was delivered. Drives the narration only, never the damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeKind {
    Basic,
    Swing,
    Spell,
    Stab,
    Critical,
    PowerStrike,
    Fireball,
    SneakAttack,
}

impl StrikeKind {
    pub fn is_critical(&self) -> bool {
        matches!(self, StrikeKind::Critical)
    }

    pub fn is_special(&self) -> bool {
        matches!(
            self,
            StrikeKind::PowerStrike | StrikeKind::Fireball | StrikeKind::SneakAttack
        )
    }
}

/// Result of one attack or special ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strike {
    pub attacker: String,
    pub target: String,
    pub kind: StrikeKind,
    pub damage: u32,
    pub remaining_health: u32,
}

impl Strike {
    /// Applies `damage` to `target` and records what happened.
    pub fn deliver(
        attacker: &str,
        target: &mut dyn Combatant,
        kind: StrikeKind,
        damage: u32,
    ) -> Strike {
        let remaining_health = target.take_damage(damage);
        debug!(
            attacker,
            target = target.name(),
            ?kind,
            damage,
            remaining_health,
            "strike landed"
        );
        Strike {
            attacker: attacker.to_string(),
            target: target.name().to_string(),
            kind,
            damage,
            remaining_health,
        }
    }
}

impl fmt::Display for Strike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, t, d) = (&self.attacker, &self.target, self.damage);
        match self.kind {
            StrikeKind::Basic => write!(f, "{a} attacks {t} for {d} damage!")?,
            StrikeKind::Swing => write!(f, "{a} swings a mighty sword at {t} for {d} damage!")?,
            StrikeKind::Spell => write!(f, "{a} casts a spell on {t} for {d} magic damage!")?,
            StrikeKind::Stab => write!(f, "{a} attacks {t} for {d} damage.")?,
            StrikeKind::Critical => write!(f, "💥 Critical hit! {a} strikes {t} for {d} damage!")?,
            StrikeKind::PowerStrike => {
                write!(f, "{a} performs a POWER STRIKE on {t} for {d} damage!")?
            }
            StrikeKind::Fireball => write!(f, "{a} launches a FIREBALL at {t} for {d} damage!")?,
            StrikeKind::SneakAttack => {
                write!(f, "🗡️ {a} performs a SNEAK ATTACK on {t} for {d} damage!")?
            }
        }
        write!(
            f,
            "\n{t} takes {d} damage! Health is now {}.",
            self.remaining_health
        )
    }
}
