//! # Create Release Command
//!
//! Creates a fix version in a Jira project, dated today.

use anyhow::Result;
use clap::{ArgAction, Args};
use fixver_core::output::{format_version, print_info, print_success};

use crate::cli::ConnectionArgs;
use crate::clients;

/// Arguments for the createRelease command
#[derive(Args)]
pub struct CreateReleaseArgs {
  #[command(flatten)]
  pub connection: ConnectionArgs,

  /// Name of the fix version to create
  #[arg(long, short = 'v', value_name = "NAME")]
  pub version: String,

  /// Key of the Jira project the version belongs to
  #[arg(long, short = 'p', value_name = "KEY")]
  pub project: String,

  /// Whether the version is created as already released
  #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
  pub released: bool,
}

/// Handle the createRelease command
pub(crate) fn handle_create_release_command(args: CreateReleaseArgs) -> Result<()> {
  let (rt, client) = clients::create_runtime_and_client(&args.connection)?;

  rt.block_on(async {
    print_info(&format!(
      "Creating release {} in project {}",
      format_version(&args.version),
      args.project
    ));

    let version = client
      .create_fix_version(&args.version, &args.project, args.released)
      .await?;

    print_success(&format!(
      "Created release {} with id {}",
      format_version(&version.name),
      version.id
    ));

    Ok(())
  })
}
