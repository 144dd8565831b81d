//! # Jira API Models
//!
//! Request and response models for the fix version endpoints, including the
//! error envelope Jira returns on failed requests.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub email: String,
  pub token: String,
}

/// Request payload for creating a fix version
///
/// The field order matches the wire format of the version endpoint.
#[derive(Debug, Serialize)]
pub struct ReleaseRequestBody {
  pub name: String,
  pub released: bool,
  #[serde(rename = "releaseDate")]
  pub release_date: String,
  pub project: String,
}

impl ReleaseRequestBody {
  /// Build a release payload dated today in local time
  pub fn new(version_name: &str, project_key: &str, released: bool) -> Result<Self> {
    if version_name.is_empty() {
      return Err(Error::Validation("version name"));
    }
    if project_key.is_empty() {
      return Err(Error::Validation("project key"));
    }

    Ok(Self {
      name: version_name.to_string(),
      released,
      release_date: Local::now().format("%Y-%m-%d").to_string(),
      project: project_key.to_string(),
    })
  }
}

/// Request payload for adding a fix version to an issue
#[derive(Debug, Serialize)]
pub struct AssignRequestBody {
  pub update: UpdateFields,
}

/// Update block of an issue edit request
#[derive(Debug, Serialize)]
pub struct UpdateFields {
  #[serde(rename = "fixVersions")]
  pub fix_versions: Vec<FixVersionOperation>,
}

/// A single fix version edit operation
#[derive(Debug, Serialize)]
pub struct FixVersionOperation {
  pub add: VersionName,
}

/// A fix version referenced by name
#[derive(Debug, Serialize)]
pub struct VersionName {
  pub name: String,
}

impl AssignRequestBody {
  /// Build an issue update payload that adds one fix version
  pub fn new(version_name: &str) -> Result<Self> {
    if version_name.is_empty() {
      return Err(Error::Validation("version name"));
    }

    Ok(Self {
      update: UpdateFields {
        fix_versions: vec![FixVersionOperation {
          add: VersionName {
            name: version_name.to_string(),
          },
        }],
      },
    })
  }
}

/// Fix version record returned by the version endpoint
#[derive(Debug, Deserialize)]
pub struct CreatedVersion {
  #[serde(rename = "self")]
  pub self_link: String,
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub archived: bool,
  #[serde(default)]
  pub released: bool,
  #[serde(rename = "releaseDate", default)]
  pub release_date: Option<String>,
  #[serde(rename = "userReleaseDate", default)]
  pub user_release_date: Option<String>,
  #[serde(rename = "projectId", default)]
  pub project_id: Option<u64>,
}

/// Error envelope returned by Jira on failed requests
///
/// Every field is defaulted so that arbitrary JSON parses into an empty
/// envelope instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct JiraErrorEnvelope {
  #[serde(rename = "errorMessages", default)]
  pub error_messages: Vec<Value>,
  #[serde(default)]
  pub errors: JiraErrorDetails,
}

/// Field-level error details inside the envelope
#[derive(Debug, Default, Deserialize)]
pub struct JiraErrorDetails {
  #[serde(default)]
  pub name: Option<String>,
}

impl JiraErrorEnvelope {
  /// Pick the most specific human-readable message from the envelope
  ///
  /// Prefers the field-level `errors.name` entry, falls back to the first
  /// general error message, and returns `None` for an empty envelope.
  pub fn message(&self) -> Option<String> {
    match &self.errors.name {
      Some(name) if !name.is_empty() => Some(name.clone()),
      _ => self.error_messages.first().map(|value| match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
      }),
    }
  }
}
