// src/showcase.rs

use combat::{Battle, BattleOutcome, Character, Report, Strike};
use error::GameError;
use hero::{Class, Fighter};
use items::Weapon;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use strum::IntoEnumIterator;
use tracing::info;

use crate::config::{OutputFormat, ShowcaseConfig};

pub const DUMMY_HEALTH: u32 = 100;
pub const ENEMY_HEALTH: u32 = 50;

fn hero_name(class: Class) -> &'static str {
    match class {
        Class::Warrior => "Sir Galahad",
        Class::Mage => "Merlin",
        Class::Rogue => "Robin Hood",
    }
}

/// One full showcase session, captured as data
#[derive(Debug, Clone, Serialize)]
pub struct Showcase {
    pub seed: u64,
    pub roster: Vec<Report>,
    /// Same `attack` call on each hero against a freshly healed dummy
    pub polymorphism: Vec<Strike>,
    pub specials: Vec<Strike>,
    pub weapons: Vec<Weapon>,
    pub battle: BattleOutcome,
}

/// Runs every showcase step: roster, polymorphic attacks, special abilities,
/// weapons, and a warrior vs mage exchange.
pub fn run_showcase(config: &ShowcaseConfig) -> Showcase {
    let mut fighters: Vec<Box<dyn Fighter>> = Class::iter()
        .map(|class| class.spawn(hero_name(class), config.seed))
        .collect();

    let roster = fighters.iter().map(|f| f.report()).collect();

    let mut dummy = Character::new("Target Dummy", DUMMY_HEALTH, 0, 0);
    let polymorphism = fighters
        .iter_mut()
        .map(|fighter| {
            let strike = fighter.attack(&mut dummy);
            dummy.reset_health(DUMMY_HEALTH);
            strike
        })
        .collect();

    let specials = fighters
        .iter_mut()
        .enumerate()
        .map(|(i, fighter)| {
            let mut enemy = Character::new(format!("Enemy{}", i + 1), ENEMY_HEALTH, 0, 0);
            fighter.special_ability(&mut enemy)
        })
        .collect();

    let weapons = Class::iter().map(|class| class.starting_weapon()).collect();

    // 战士对法师
    let (warrior, rest) = fighters.split_at_mut(1);
    let battle = Battle::engage(warrior[0].as_combatant_mut(), rest[0].as_combatant_mut());
    info!(seed = config.seed, verdict = ?battle.verdict, "showcase finished");

    Showcase {
        seed: config.seed,
        roster,
        polymorphism,
        specials,
        weapons,
        battle,
    }
}

/// Writes the showcase in the configured format.
pub fn render(showcase: &Showcase, format: OutputFormat, out: &mut impl Write) -> Result<(), GameError> {
    match format {
        OutputFormat::Text => writeln!(out, "{showcase}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, showcase)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

impl fmt::Display for Showcase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== CHARACTER ABILITIES SHOWCASE ===")?;
        writeln!(f, "Testing inheritance, polymorphism, and method overriding")?;
        writeln!(f, "{}", "=".repeat(50))?;

        writeln!(f, "\n📊 Character Stats:")?;
        for report in &self.roster {
            writeln!(f, "{report}")?;
        }

        writeln!(f, "\n⚔️ Testing Polymorphism (same attack method, different behavior):")?;
        for strike in &self.polymorphism {
            writeln!(f, "\n{} attacks the dummy:", strike.attacker)?;
            writeln!(f, "{strike}")?;
        }

        writeln!(f, "\n✨ Testing Special Abilities:")?;
        for strike in &self.specials {
            writeln!(f, "{strike}")?;
        }

        writeln!(f, "\n🗡️ Testing Weapon Composition:")?;
        for weapon in &self.weapons {
            writeln!(f, "{weapon}")?;
        }

        writeln!(f, "\n⚔️ Testing Battle System:")?;
        writeln!(f, "\n{}", self.battle)?;

        write!(f, "\n✅ Testing complete!")
    }
}
