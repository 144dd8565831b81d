//! # Jira Issue Endpoints
//!
//! Endpoint implementation for adding an existing fix version to issues.

use reqwest::Method;
use tracing::{info, instrument};

use crate::client::JiraClient;
use crate::consts::API_PATH;
use crate::error::Result;
use crate::models::AssignRequestBody;

impl JiraClient {
  /// Add a fix version to an issue by key
  ///
  /// The version must already exist in the issue's project; the update is
  /// additive and leaves other fix versions on the issue untouched.
  ///
  /// # Errors
  ///
  /// Returns an error if the version name is empty, the request cannot be
  /// sent, or the server rejects the update.
  #[instrument(skip(self), level = "debug")]
  pub async fn assign_version(&self, issue_key: &str, version_name: &str) -> Result<()> {
    info!("Adding fix version {} to issue {}", version_name, issue_key);

    let body = AssignRequestBody::new(version_name)?;
    let url = self.endpoint(&format!("{API_PATH}/issue/{issue_key}"))?;

    self.send_json(Method::PUT, url, &body).await?;

    Ok(())
  }
}
