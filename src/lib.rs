// src/lib.rs

pub mod config;
pub mod showcase;

pub use combat;
pub use error;
pub use hero;
pub use items;

pub use crate::config::{OutputFormat, ShowcaseConfig};
pub use crate::showcase::{Showcase, render, run_showcase};
