// src/config.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_SEED: u64 = 42;

/// How the showcase is written to stdout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Showcase settings: defaults, then environment, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Seed for the rogue's crit die
    pub seed: u64,
    pub format: OutputFormat,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            format: OutputFormat::Text,
        }
    }
}

impl ShowcaseConfig {
    /// Reads `SHOWCASE_SEED` and `SHOWCASE_FORMAT`; unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let seed = lookup("SHOWCASE_SEED")
            .and_then(|val| val.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let format = lookup("SHOWCASE_FORMAT")
            .and_then(|val| val.parse().ok())
            .unwrap_or(defaults.format);
        Self { seed, format }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Applies command-line values on top.
    pub fn with_overrides(mut self, seed: Option<u64>, format: Option<OutputFormat>) -> Self {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
