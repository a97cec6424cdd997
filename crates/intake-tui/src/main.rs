//! Urgent care intake capacity TUI
//!
//! Estimates remaining clinician capacity before closing and which triage
//! levels can still be accepted, with a manual override log.

use anyhow::{Context, Result};
use clap::Parser;
use intake_tui::{
    config::{self, ConfigOverrides},
    utils::init_tracing,
    Application, Config,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "intake-tui")]
#[command(version, about = "Urgent care intake capacity by triage level")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Clinicians on duty at startup
    #[arg(long)]
    clinicians: Option<u32>,

    /// Closing hour (24h) at startup
    #[arg(long)]
    closing_hour: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::generate_example());
        return Ok(());
    }

    let overrides = ConfigOverrides {
        clinicians: args.clinicians,
        closing_hour: args.closing_hour,
        log_level: args.log_level,
        log_file: args.log_file,
    };
    let config = config::load(args.config.as_deref(), &overrides)?;

    let _guard = init_tracing(&config.logging)?;
    info!(
        clinicians = config.defaults.clinicians,
        closing_hour = config.defaults.closing_hour,
        "Starting intake TUI"
    );

    let mut app = Application::new(&config).context("Failed to initialize application")?;
    app.run().context("Application loop failed")?;

    info!(
        overrides = app.model().overrides.log().len(),
        "Intake TUI shutting down"
    );
    Ok(())
}
