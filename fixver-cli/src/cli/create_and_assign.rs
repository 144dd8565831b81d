//! # Create and Assign Command
//!
//! Creates a fix version and assigns it to the issues of a release in one
//! run. Assignment only starts once the version exists.

use anyhow::{Result, bail};
use clap::{ArgAction, Args};
use fixver_core::output::{format_version, print_info, print_success};
use fixver_jira::create_and_assign;

use crate::cli::ConnectionArgs;
use crate::cli::assign_release::report_assignments;
use crate::clients;

/// Arguments for the createAndAssign command
#[derive(Args)]
pub struct CreateAndAssignArgs {
  #[command(flatten)]
  pub connection: ConnectionArgs,

  /// Name of the fix version to create and assign
  #[arg(long, short = 'v', value_name = "NAME")]
  pub version: String,

  /// Key of the Jira project the version belongs to
  #[arg(long, short = 'p', value_name = "KEY")]
  pub project: String,

  /// Whether the version is created as already released
  #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
  pub released: bool,

  /// Release notes to scan for issue keys
  #[arg(long = "releaseBody", alias = "release-body", short = 'b', value_name = "TEXT")]
  pub release_body: Option<String>,

  /// Issue keys to assign in addition to those found in the release notes
  #[arg(long, short = 'i', value_delimiter = ',', value_name = "KEYS")]
  pub issues: Vec<String>,

  /// Issue keys to skip even when they appear in the release notes
  #[arg(long, short = 'f', value_delimiter = ',', value_name = "KEYS")]
  pub filter: Vec<String>,
}

/// Handle the createAndAssign command
pub(crate) fn handle_create_and_assign_command(args: CreateAndAssignArgs) -> Result<()> {
  let release_body = args.release_body.clone().unwrap_or_default();

  if release_body.is_empty() && args.issues.is_empty() {
    bail!("no issues provided. Provide issues through the --issues and/or --releaseBody flags");
  }

  let (rt, client) = clients::create_runtime_and_client(&args.connection)?;

  rt.block_on(async {
    print_info(&format!(
      "Creating release {} in project {}",
      format_version(&args.version),
      args.project
    ));

    let (version, assigned) = create_and_assign(
      &client,
      &release_body,
      &args.version,
      &args.project,
      args.released,
      &args.issues,
      &args.filter,
    )
    .await?;

    print_success(&format!(
      "Created release {} with id {}",
      format_version(&version.name),
      version.id
    ));
    report_assignments(&args.version, &assigned);

    Ok(())
  })
}
