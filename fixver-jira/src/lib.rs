//! # Jira Fix Version Client
//!
//! Provides Jira REST API integration for creating fix versions and adding
//! them to issues, plus the release orchestration that drives both endpoints
//! from release-note text and an explicit issue list.

mod client;
mod consts;
mod endpoints;
pub mod error;
pub mod models;
mod release;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export the error type and result alias
pub use error::{Error, Result};
// Re-export models
pub use models::{AssignRequestBody, CreatedVersion, JiraAuth, JiraErrorEnvelope, ReleaseRequestBody};
// Re-export the release orchestration
pub use release::{assign_versions, create_and_assign};
