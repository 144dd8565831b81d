//! # Fixver CLI Entry Point
//!
//! The main entry point for the fixver command-line tool, which creates fix
//! versions in a Jira project and assigns them to the issues of a release.

use anyhow::Result;
use clap::Parser;
use fixver_cli::cli::{Cli, handle_cli};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
  // Parse CLI arguments using the derive-based implementation
  let cmd = Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // --verbose: info, warnings, and errors
    2 => tracing::Level::DEBUG, // --verbose --verbose: debug and above
    _ => tracing::Level::TRACE, // three or more: trace and everything else
  };

  // Initialize the tracing subscriber with the specified level
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  handle_cli(cmd)
}
