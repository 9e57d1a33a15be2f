use anyhow::{Result, anyhow};
use character_showcase::{
    OutputFormat, ShowcaseConfig, error::handle_error, render, run_showcase,
};
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Run the character abilities showcase")]
struct Cli {
    /// Seed for the rogue's critical-hit die (overrides SHOWCASE_SEED)
    #[arg(long)]
    seed: Option<u64>,
    /// Output format (overrides SHOWCASE_FORMAT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();
    let config = ShowcaseConfig::from_env().with_overrides(cli.seed, cli.format);
    tracing::debug!(?config, "configuration resolved");

    let showcase = run_showcase(&config);
    let mut stdout = io::stdout().lock();
    render(&showcase, config.format, &mut stdout).map_err(|e| anyhow!(handle_error(&e)))
}
