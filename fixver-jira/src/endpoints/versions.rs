//! # Jira Version Endpoints
//!
//! Endpoint implementation for creating fix versions in a Jira project.

use reqwest::Method;
use tracing::{debug, info, instrument};

use crate::client::JiraClient;
use crate::consts::API_PATH;
use crate::error::Result;
use crate::models::{CreatedVersion, ReleaseRequestBody};

impl JiraClient {
  /// Create a fix version in the given project, dated today
  ///
  /// # Errors
  ///
  /// Returns an error if the version name or project key is empty, the
  /// request cannot be sent, or the server rejects the version (for example
  /// because the name already exists in the project).
  #[instrument(skip(self), level = "debug")]
  pub async fn create_fix_version(&self, version_name: &str, project_key: &str, released: bool) -> Result<CreatedVersion> {
    info!("Creating fix version {} in project {}", version_name, project_key);

    let body = ReleaseRequestBody::new(version_name, project_key, released)?;
    let url = self.endpoint(&format!("{API_PATH}/version"))?;

    let response = self.send_json(Method::POST, url, &body).await?;
    let version = response.json::<CreatedVersion>().await?;

    debug!("Created version {} with id {}", version.name, version.id);

    Ok(version)
  }
}
