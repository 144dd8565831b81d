//! # Assign Release Command
//!
//! Assigns an existing fix version to every issue referenced by a release,
//! collected from the release notes and the explicit issue list.

use anyhow::{Result, bail};
use clap::Args;
use fixver_core::output::{format_issue_key, format_version, print_success, print_warning};
use fixver_jira::assign_versions;

use crate::cli::ConnectionArgs;
use crate::clients;

/// Arguments for the assignRelease command
#[derive(Args)]
pub struct AssignReleaseArgs {
  #[command(flatten)]
  pub connection: ConnectionArgs,

  /// Name of the fix version to assign
  #[arg(long, short = 'v', value_name = "NAME")]
  pub version: String,

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

/// Handle the assignRelease command
pub(crate) fn handle_assign_release_command(args: AssignReleaseArgs) -> Result<()> {
  let release_body = args.release_body.clone().unwrap_or_default();

  if release_body.is_empty() && args.issues.is_empty() {
    bail!("no issues provided. Provide issues through the --issues and/or --releaseBody flags");
  }

  let (rt, client) = clients::create_runtime_and_client(&args.connection)?;

  rt.block_on(async {
    let assigned = assign_versions(&client, &release_body, &args.version, &args.issues, &args.filter).await?;
    report_assignments(&args.version, &assigned);
    Ok(())
  })
}

/// Print the outcome of an assignment run
pub(crate) fn report_assignments(version_name: &str, assigned: &[String]) {
  if assigned.is_empty() {
    print_warning("No issues matched; nothing to assign");
    return;
  }

  let issue_list = assigned
    .iter()
    .map(|key| format_issue_key(key))
    .collect::<Vec<_>>()
    .join(", ");

  print_success(&format!(
    "Assigned version {} to {} issue(s): {}",
    format_version(version_name),
    assigned.len(),
    issue_list
  ));
}
