//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the fixver tool,
//! covering fix version creation and assignment against a Jira project.

mod assign_release;
mod connection;
mod create_and_assign;
mod create_release;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use fixver_core::output::ColorMode;

pub use connection::ConnectionArgs;

/// Top-level CLI command for the fixver tool
#[derive(Parser)]
#[command(name = "fixver")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Create Jira fix versions and assign them to the issues of a release")]
#[command(
  long_about = "Fixver creates fix versions in a Jira project and assigns them to issues.\n\n\
        Issue keys are read from release notes, merged with an explicit issue list,\n\
        and each matching issue gets the new version added to its fixVersions field."
)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())  // Make usage line stand out
    .literal(AnsiColor::BrightGreen.on_default().bold())  // Command names, flags bold
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             --verbose: Show info level messages\n\
             --verbose --verbose: Show debug level messages\n\
             --verbose --verbose --verbose: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the fixver tool
#[derive(Subcommand)]
pub enum Commands {
  /// Assign an existing fix version to the issues of a release
  #[command(name = "assignRelease")]
  #[command(long_about = "Assign an existing fix version to the issues of a release.\n\n\
            Issue keys are extracted from the release notes passed via --releaseBody\n\
            and merged with any keys passed via --issues. Duplicates are assigned\n\
            once, and keys listed in --filter are skipped.")]
  #[command(alias = "assignVersion")]
  #[command(alias = "assign-release")]
  AssignRelease(assign_release::AssignReleaseArgs),

  /// Create a fix version and assign it to the issues of a release
  #[command(
    long_about = "Create a fix version and assign it to the issues of a release.\n\n\
            The version is created first; issues are only updated once creation\n\
            succeeds. Issue keys come from --releaseBody and --issues, with\n\
            --filter removing keys that should be skipped."
  )]
  #[command(name = "createAndAssign")]
  #[command(alias = "create-and-assign")]
  CreateAndAssign(create_and_assign::CreateAndAssignArgs),

  /// Create a fix version in a Jira project
  #[command(long_about = "Create a fix version in a Jira project.\n\n\
            The version is dated with today's date and marked released unless\n\
            --released false is passed.")]
  #[command(name = "createRelease")]
  #[command(alias = "createVersion")]
  #[command(alias = "create-release")]
  CreateRelease(create_release::CreateReleaseArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
      // Don't call set_override, allowing it to detect terminal automatically
    }
  }

  match cli.command {
    Commands::AssignRelease(assign_release) => assign_release::handle_assign_release_command(assign_release),
    Commands::CreateAndAssign(create_and_assign) => {
      create_and_assign::handle_create_and_assign_command(create_and_assign)
    }
    Commands::CreateRelease(create_release) => create_release::handle_create_release_command(create_release),
  }
}
