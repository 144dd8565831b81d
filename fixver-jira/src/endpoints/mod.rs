//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the two resources the release flow
//! touches: project versions and issues.

pub mod issues;
pub mod versions;
