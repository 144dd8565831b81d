//! # Client Creation
//!
//! Centralized client creation for the Jira API, pairing a tokio runtime
//! with an authenticated client built from command-line flags.

use anyhow::{Context, Result};
use fixver_jira::{JiraClient, create_jira_client};
use tokio::runtime::Runtime;

use crate::cli::ConnectionArgs;

/// Creates a tokio runtime and an authenticated Jira client
///
/// This is a convenience function for CLI commands that need both a runtime
/// and a Jira client.
pub fn create_runtime_and_client(connection: &ConnectionArgs) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client =
    create_jira_client(&connection.host, &connection.user, &connection.token).context("Failed to create Jira client")?;

  Ok((rt, client))
}
