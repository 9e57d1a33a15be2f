// src/combat/src/lib.rs

pub mod combatant;
pub mod report;
pub mod strike;

pub use crate::combatant::{Character, Combatant};
pub use crate::report::{Progression, Report};
pub use crate::strike::{Strike, StrikeKind};

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Handles a single exchange between two combatants
pub struct Battle;

/// One-shot exchange progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    NotStarted,
    FirstAttackerMoved,
    Complete,
}

/// Drives the exchange one step at a time. Holds both sides for its whole
/// life so their roles cannot be swapped between steps.
pub struct Exchange<'a> {
    first: &'a mut dyn Combatant,
    second: &'a mut dyn Combatant,
    phase: BattlePhase,
    strikes: Vec<Strike>,
}

impl<'a> Exchange<'a> {
    pub fn new(first: &'a mut dyn Combatant, second: &'a mut dyn Combatant) -> Self {
        Self {
            first,
            second,
            phase: BattlePhase::NotStarted,
            strikes: Vec::new(),
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn strikes(&self) -> &[Strike] {
        &self.strikes
    }

    /// 先手方
    pub fn first(&self) -> &dyn Combatant {
        &*self.first
    }

    pub fn second(&self) -> &dyn Combatant {
        &*self.second
    }

    /// Advances to the next phase. Stepping a completed exchange is a no-op.
    pub fn step(&mut self) -> BattlePhase {
        match self.phase {
            BattlePhase::NotStarted => {
                self.strikes.push(self.first.attack(&mut *self.second));
                self.phase = BattlePhase::FirstAttackerMoved;
            }
            BattlePhase::FirstAttackerMoved => {
                // 被击倒的一方无法反击
                if self.second.is_alive() {
                    self.strikes.push(self.second.attack(&mut *self.first));
                } else {
                    debug!(defender = self.second.name(), "defender down, no retaliation");
                }
                self.phase = BattlePhase::Complete;
            }
            BattlePhase::Complete => {}
        }
        self.phase
    }

    /// Runs the remaining steps.
    pub fn finish(mut self) -> Vec<Strike> {
        while self.step() != BattlePhase::Complete {}
        self.strikes
    }
}

/// Which side of the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

/// Who came out ahead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Winner { side: Side, name: String },
    Tie,
}

impl Verdict {
    /// Strictly higher remaining health wins.
    pub fn decide(first: &Report, second: &Report) -> Self {
        if first.health > second.health {
            Verdict::Winner {
                side: Side::First,
                name: first.name.clone(),
            }
        } else if second.health > first.health {
            Verdict::Winner {
                side: Side::Second,
                name: second.name.clone(),
            }
        } else {
            Verdict::Tie
        }
    }

    pub fn winner(&self) -> Option<&str> {
        match self {
            Verdict::Winner { name, .. } => Some(name),
            Verdict::Tie => None,
        }
    }

    pub fn winning_side(&self) -> Option<Side> {
        match self {
            Verdict::Winner { side, .. } => Some(*side),
            Verdict::Tie => None,
        }
    }
}

/// Everything a caller needs to render an exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub starting: (Report, Report),
    pub strikes: Vec<Strike>,
    pub first: Report,
    pub second: Report,
    pub verdict: Verdict,
}

impl Battle {
    /// First attacks second; second retaliates only if still standing.
    pub fn engage(first: &mut dyn Combatant, second: &mut dyn Combatant) -> BattleOutcome {
        let starting = (first.report(), second.report());

        let strikes = Exchange::new(&mut *first, &mut *second).finish();

        let (first, second) = (first.report(), second.report());
        let verdict = Verdict::decide(&first, &second);
        info!(
            first = %first.name,
            second = %second.name,
            first_health = first.health,
            second_health = second.health,
            ?verdict,
            "exchange complete"
        );

        BattleOutcome {
            starting,
            strikes,
            first,
            second,
            verdict,
        }
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start_a, start_b) = &self.starting;
        writeln!(f, "=== BATTLE: {} vs {} ===", start_a.name, start_b.name)?;
        writeln!(f, "\nStarting Stats:")?;
        writeln!(f, "{start_a}")?;
        writeln!(f, "{start_b}")?;

        writeln!(f, "\n--- Round 1 ---")?;
        for (i, strike) in self.strikes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{} attacks:", strike.attacker)?;
            writeln!(f, "{strike}")?;
        }

        writeln!(f, "\n--- Battle Results ---")?;
        writeln!(f, "{}", self.first)?;
        writeln!(f, "{}", self.second)?;
        match &self.verdict {
            Verdict::Winner { name, .. } => write!(f, "🏆 {name} wins!"),
            Verdict::Tie => write!(f, "🤝 It's a tie!"),
        }
    }
}
