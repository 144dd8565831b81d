//! # Release Orchestration
//!
//! Drives the two-step release flow: create a fix version, then add it to
//! every issue named by the release notes and the explicit issue list.

use fixver_core::{deduplicate, extract_issue_keys, filter_excluded};
use tracing::{debug, info};

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::CreatedVersion;

/// Assign a fix version to the issues of a release.
///
/// The explicit issue list comes first, keys extracted from the release body
/// are appended, duplicates are dropped (first occurrence wins), and keys on
/// the exclusion filter are removed. The remaining issues are updated one at
/// a time; the first failure stops the run and names the offending issue,
/// leaving earlier assignments in place.
///
/// Returns the assigned keys in assignment order. An empty merged list is a
/// vacuous success: no requests are sent.
pub async fn assign_versions(
  client: &JiraClient,
  release_body: &str,
  version_name: &str,
  issues: &[String],
  filter: &[String],
) -> Result<Vec<String>> {
  let mut merged = issues.to_vec();
  merged.extend(extract_issue_keys(release_body));

  let issue_keys = filter_excluded(&deduplicate(&merged), filter);

  info!("Assigning version {} to {} issue(s)", version_name, issue_keys.len());

  for issue_key in &issue_keys {
    debug!("Assigning version {} to {}", version_name, issue_key);

    client
      .assign_version(issue_key, version_name)
      .await
      .map_err(|err| Error::Assignment {
        issue: issue_key.clone(),
        source: Box::new(err),
      })?;
  }

  Ok(issue_keys)
}

/// Create a fix version and assign it to the issues of a release.
///
/// Assignment only runs once the version exists; a create failure
/// short-circuits the flow without touching any issue.
pub async fn create_and_assign(
  client: &JiraClient,
  release_body: &str,
  version_name: &str,
  project_key: &str,
  released: bool,
  issues: &[String],
  filter: &[String],
) -> Result<(CreatedVersion, Vec<String>)> {
  let version = client.create_fix_version(version_name, project_key, released).await?;
  let assigned = assign_versions(client, release_body, version_name, issues, filter).await?;

  Ok((version, assigned))
}
