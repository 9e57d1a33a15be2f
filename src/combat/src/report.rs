// src/combat/src/report.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player progression appended to a base report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub class: String,
    pub level: u32,
    pub experience: u32,
}

/// Read-only stat snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    pub health: u32,
    pub strength: u32,
    pub magic: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression: Option<Progression>,
}

impl Report {
    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = Some(progression);
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Health: {} | Strength: {} | Magic: {}",
            self.name, self.health, self.strength, self.magic
        )?;
        if let Some(p) = &self.progression {
            write!(
                f,
                "\nClass: {} | Level: {} | EXP: {}",
                p.class, p.level, p.experience
            )?;
        }
        Ok(())
    }
}
