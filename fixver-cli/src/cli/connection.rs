//! # Connection Arguments
//!
//! Shared connection flags for every command that talks to a Jira host.

use clap::Args;

/// Connection flags shared by all fixver commands
#[derive(Args)]
pub struct ConnectionArgs {
  /// Email address used for Jira API authentication
  #[arg(long, short = 'u', value_name = "EMAIL")]
  pub user: String,

  /// Base URL of the Jira host (e.g. https://company.atlassian.net)
  #[arg(long, short = 's', value_name = "URL")]
  pub host: String,

  /// API token used for Jira API authentication
  #[arg(long, short = 't', value_name = "TOKEN")]
  pub token: String,
}
